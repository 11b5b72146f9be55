use crate::transformer::transformer::XmlTransformer;

/// The filter entry point: probe the host, transform, flatten to a
/// string. Suitable for registration in a template-rendering context
/// where only a string channel exists.
pub fn xslt(xml: &str, xslt: &str) -> String {
    XmlTransformer::new().transform_to_string(xml, xslt)
}
