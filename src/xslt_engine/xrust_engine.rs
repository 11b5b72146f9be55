use xrust::item::Item;
use xrust::parser::xml::parse;
use xrust::transform::context::{Context, StaticContextBuilder};
use xrust::trees::smite::RNode;
use xrust::xdmerror::{Error as XrustError, ErrorKind};
use xrust::xslt::from_document;
use xrust::Node;
use xrust::SequenceTrait;

use crate::errors::transform_errors::TransformError;
use crate::xslt_engine::xslt_engine::{first_diagnostic_line, XsltEngine};

/// Compiled stylesheet: an evaluation context holding the template rules.
pub type XrustCompiledStylesheet = Context<RNode>;

/// Pure-Rust backend. Always available, no native libraries required.
pub struct XrustEngine;

impl XrustEngine {
    pub fn new() -> Self {
        XrustEngine
    }

    /// Parse a string into an RNode document.
    fn parse_xml(s: &str) -> Result<RNode, XrustError> {
        let doc = RNode::new_document();
        parse(doc.clone(), s, None)?; // fills the document
        Ok(doc)
    }
}

impl Default for XrustEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl XsltEngine for XrustEngine {
    type Document = RNode;
    type Compiled = XrustCompiledStylesheet;
    type Error = TransformError;

    fn parse_source(&self, xml: &str) -> Result<Self::Document, Self::Error> {
        Self::parse_xml(xml)
            .map_err(|e| TransformError::InvalidXml(first_diagnostic_line(&e.to_string())))
    }

    fn compile(&self, xslt: &str) -> Result<Self::Compiled, Self::Error> {
        let style_doc = Self::parse_xml(xslt)
            .map_err(|e| TransformError::InvalidXslt(first_diagnostic_line(&e.to_string())))?;

        // from_document resolves xsl:include/import using the parser we give it.
        let ctx = from_document(
            style_doc,
            None,                   // base URI
            |s| Self::parse_xml(s), // parser for included stylesheets
            |_| Ok(String::new()),  // loader for external resources
        )
        .map_err(|e| TransformError::InvalidXslt(first_diagnostic_line(&e.to_string())))?;

        Ok(ctx)
    }

    fn transform(
        &self,
        compiled: &mut Self::Compiled,
        source: &Self::Document,
    ) -> Result<String, Self::Error> {
        // Clone the context (cheap; internally Rc-based) so the compiled
        // stylesheet stays reusable.
        let mut ctx = compiled.clone();
        ctx.context(vec![Item::Node(source.clone())], 0);
        ctx.result_document(RNode::new_document());

        let mut static_context = StaticContextBuilder::new()
            .message(|_| Ok(())) // ignore xsl:message
            .fetcher(|_| {
                Err(XrustError::new(
                    ErrorKind::NotImplemented,
                    "document() and external fetcher not implemented",
                ))
            })
            .parser(|_| {
                Err(XrustError::new(
                    ErrorKind::NotImplemented,
                    "external parser not implemented",
                ))
            })
            .build();

        let result_seq = ctx
            .evaluate(&mut static_context)
            .map_err(|e| TransformError::Engine(e.to_string()))?;

        Ok(result_seq.to_xml())
    }
}
