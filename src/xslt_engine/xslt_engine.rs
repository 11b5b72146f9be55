pub trait XsltEngine {
    /// Parsed representation of a source document for this engine.
    type Document;
    /// Type used to represent a compiled stylesheet for this engine.
    type Compiled;
    /// Error type returned by this engine.
    type Error;

    /// Parse source XML. Checked before the stylesheet so that a bad
    /// document is reported ahead of a bad stylesheet.
    fn parse_source(&self, xml: &str) -> Result<Self::Document, Self::Error>;

    /// Compile an XSLT stylesheet from text.
    fn compile(&self, xslt: &str) -> Result<Self::Compiled, Self::Error>;

    /// Transform a parsed document using a compiled stylesheet. The
    /// compiled stylesheet may be reused across many documents.
    fn transform(
        &self,
        compiled: &mut Self::Compiled,
        source: &Self::Document,
    ) -> Result<String, Self::Error>;
}

/// First line of an engine diagnostic, trimmed. Engines report multi-line
/// positional dumps; the filter contract wants one brief line.
pub fn first_diagnostic_line(message: &str) -> String {
    let line = message.lines().next().unwrap_or("").trim();
    if line.is_empty() {
        "unknown parser error".to_string()
    } else {
        line.to_string()
    }
}
