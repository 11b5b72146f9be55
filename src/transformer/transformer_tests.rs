use crate::errors::transform_errors::TransformError;
use crate::transformer::filter::xslt;
use crate::transformer::transformer::XmlTransformer;

const ECHO_XSLT: &str = r#"<xsl:stylesheet version="1.0" xmlns:xsl="http://www.w3.org/1999/XSL/Transform">
  <xsl:template match="/"><xsl:value-of select="child::a"/></xsl:template>
</xsl:stylesheet>"#;

const WRAP_XSLT: &str = r#"<xsl:stylesheet version="1.0" xmlns:xsl="http://www.w3.org/1999/XSL/Transform">
  <xsl:template match="/"><out><xsl:value-of select="child::a"/></out></xsl:template>
</xsl:stylesheet>"#;

const DROP_ALL_XSLT: &str = r#"<xsl:stylesheet version="1.0" xmlns:xsl="http://www.w3.org/1999/XSL/Transform">
  <xsl:template match="/"></xsl:template>
</xsl:stylesheet>"#;

#[test]
fn test_no_xml_message() {
    let transformer = XmlTransformer::new();
    assert_eq!(transformer.transform_to_string("", ECHO_XSLT), "No XML");
}

#[test]
fn test_no_xslt_message() {
    let transformer = XmlTransformer::new();
    assert_eq!(transformer.transform_to_string("<a>1</a>", ""), "No XSLT");
}

#[test]
fn test_no_xml_and_xslt_message() {
    let transformer = XmlTransformer::new();
    assert_eq!(transformer.transform_to_string("", ""), "No XML & XSLT");
}

#[test]
fn test_missing_input_checked_before_capability() {
    // A host without XSLT support still names the missing inputs first.
    let transformer = XmlTransformer::without_backend();
    assert_eq!(transformer.transform_to_string("", ""), "No XML & XSLT");
}

#[test]
fn test_unsupported_host_message() {
    let transformer = XmlTransformer::without_backend();
    assert_eq!(
        transformer.transform_to_string("<a>1</a>", ECHO_XSLT),
        "XSL transformation is not supported by your browser"
    );
    assert_eq!(
        transformer.transform_to_string("not xml", "not xslt"),
        "XSL transformation is not supported by your browser"
    );
}

#[test]
fn test_unsupported_host_tagged() {
    let transformer = XmlTransformer::without_backend();
    assert!(matches!(
        transformer.transform("<a>1</a>", ECHO_XSLT),
        Err(TransformError::Unsupported)
    ));
    assert!(transformer.backend_name().is_none());
}

#[test]
fn test_detect_always_finds_a_backend() {
    let transformer = XmlTransformer::new();
    assert!(transformer.backend_name().is_some());
}

#[test]
fn test_echo_transform() {
    let transformer = XmlTransformer::new();
    let out = transformer.transform_to_string("<a>1</a>", ECHO_XSLT);
    assert_eq!(out, "1");
    assert_ne!(out, "(empty)");
}

#[test]
fn test_wrapping_transform() {
    let transformer = XmlTransformer::new();
    assert_eq!(
        transformer.transform_to_string("<a>1</a>", WRAP_XSLT),
        "<out>1</out>"
    );
}

#[test]
fn test_invalid_xml_message() {
    let transformer = XmlTransformer::new();
    let out = transformer.transform_to_string("<a><b></a>", ECHO_XSLT);
    assert!(out.starts_with("Invalid XML: "), "got: {out}");
    assert!(out.len() > "Invalid XML: ".len());
}

#[test]
fn test_invalid_xml_tagged() {
    let transformer = XmlTransformer::new();
    assert!(matches!(
        transformer.transform("<a><b></a>", ECHO_XSLT),
        Err(TransformError::InvalidXml(_))
    ));
}

#[test]
fn test_invalid_xslt_message() {
    let transformer = XmlTransformer::new();
    let out = transformer.transform_to_string("<a>1</a>", "not xml at all");
    assert!(out.starts_with("Invalid XSLT: "), "got: {out}");
}

#[test]
fn test_well_formed_but_not_a_stylesheet() {
    let transformer = XmlTransformer::new();
    let out = transformer.transform_to_string("<a>1</a>", "<nope/>");
    assert!(out.starts_with("Invalid XSLT: "), "got: {out}");
}

#[test]
fn test_bad_xml_reported_before_bad_xslt() {
    let transformer = XmlTransformer::new();
    let out = transformer.transform_to_string("<a><b></a>", "not xml at all");
    assert!(out.starts_with("Invalid XML: "), "got: {out}");
}

#[test]
fn test_empty_output_placeholder() {
    let transformer = XmlTransformer::new();
    assert_eq!(
        transformer.transform_to_string("<a>1</a>", DROP_ALL_XSLT),
        "(empty)"
    );
}

#[test]
fn test_empty_output_is_ok_in_tagged_api() {
    // The placeholder belongs to the string channel only.
    let transformer = XmlTransformer::new();
    assert_eq!(transformer.transform("<a>1</a>", DROP_ALL_XSLT).unwrap(), "");
}

#[test]
fn test_idempotent_calls() {
    let transformer = XmlTransformer::new();
    let first = transformer.transform_to_string("<a>1</a>", WRAP_XSLT);
    let second = transformer.transform_to_string("<a>1</a>", WRAP_XSLT);
    assert_eq!(first, second);
}

#[test]
fn test_filter_function() {
    assert_eq!(xslt("", ""), "No XML & XSLT");
    assert_eq!(xslt("<a>1</a>", ECHO_XSLT), "1");
}
