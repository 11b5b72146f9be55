use thiserror::Error;

/// Which of the two required inputs was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPart {
    Xml,
    Xslt,
    Both,
}

impl MissingPart {
    pub fn from_inputs(xml_missing: bool, xslt_missing: bool) -> Option<Self> {
        match (xml_missing, xslt_missing) {
            (true, true) => Some(MissingPart::Both),
            (true, false) => Some(MissingPart::Xml),
            (false, true) => Some(MissingPart::Xslt),
            (false, false) => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MissingPart::Xml => "XML",
            MissingPart::Xslt => "XSLT",
            MissingPart::Both => "XML & XSLT",
        }
    }
}

/// Everything that can go wrong in one transform call.
///
/// The `Display` strings are the filter's public contract; the string
/// wrapper in `transformer` returns them verbatim to callers expecting
/// the flat string channel.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("No {}", .0.label())]
    MissingInput(MissingPart),

    #[error("XSL transformation is not supported by your browser")]
    Unsupported,

    #[error("Invalid XML: {0}")]
    InvalidXml(String),

    #[error("Invalid XSLT: {0}")]
    InvalidXslt(String),

    #[error("XSL transformation failed: {0}")]
    Engine(String),
}

impl TransformError {
    /// Missing inputs from the raw strings, if any.
    pub fn check_inputs(xml: &str, xslt: &str) -> Option<Self> {
        MissingPart::from_inputs(xml.is_empty(), xslt.is_empty()).map(TransformError::MissingInput)
    }
}
