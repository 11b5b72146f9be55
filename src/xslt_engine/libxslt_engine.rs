use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

use libxml::parser::Parser;
use libxslt::parser::parse_file;
use libxslt::stylesheet::Stylesheet;

use crate::errors::transform_errors::TransformError;
use crate::xslt_engine::xslt_engine::{first_diagnostic_line, XsltEngine};

/// Native libxml2/libxslt backend.
///
/// libxslt compiles stylesheets from files, so stylesheet text is staged
/// into `scratch_dir` under a content-hash name before compilation. The
/// directory is a constructor parameter; nothing else is read from the
/// environment.
pub struct LibXsltEngine {
    scratch_dir: PathBuf,
}

impl LibXsltEngine {
    pub fn new(scratch_dir: impl Into<PathBuf>) -> Self {
        LibXsltEngine {
            scratch_dir: scratch_dir.into(),
        }
    }

    /// Scratch files go under the system temp directory.
    pub fn with_default_scratch_dir() -> Self {
        Self::new(std::env::temp_dir().join("xslt-filter"))
    }

    fn stage_stylesheet(&self, xslt: &str) -> Result<PathBuf, TransformError> {
        fs::create_dir_all(&self.scratch_dir)
            .map_err(|e| TransformError::Engine(e.to_string()))?;

        let mut hasher = DefaultHasher::new();
        xslt.hash(&mut hasher);
        let path = self
            .scratch_dir
            .join(format!("{:016x}.xslt", hasher.finish()));

        fs::write(&path, xslt).map_err(|e| TransformError::Engine(e.to_string()))?;
        Ok(path)
    }
}

impl XsltEngine for LibXsltEngine {
    type Document = libxml::tree::Document;
    type Compiled = Stylesheet;
    type Error = TransformError;

    fn parse_source(&self, xml: &str) -> Result<Self::Document, Self::Error> {
        let parser = Parser::default();
        parser
            .parse_string(xml)
            .map_err(|e| TransformError::InvalidXml(first_diagnostic_line(&e.to_string())))
    }

    fn compile(&self, xslt: &str) -> Result<Self::Compiled, Self::Error> {
        let path = self.stage_stylesheet(xslt)?;
        let path_str = path
            .to_str()
            .ok_or_else(|| TransformError::Engine("invalid scratch path".to_string()))?;

        parse_file(path_str).map_err(|e| TransformError::InvalidXslt(first_diagnostic_line(&e)))
    }

    fn transform(
        &self,
        compiled: &mut Self::Compiled,
        source: &Self::Document,
    ) -> Result<String, Self::Error> {
        let result_doc = compiled
            .transform(source, Vec::new())
            .map_err(|e| TransformError::Engine(e.to_string()))?;

        Ok(result_doc.to_string())
    }
}
