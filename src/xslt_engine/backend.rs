use tracing::debug;

use crate::errors::transform_errors::TransformError;
#[cfg(feature = "libxslt")]
use crate::xslt_engine::libxslt_engine::LibXsltEngine;
use crate::xslt_engine::xrust_engine::XrustEngine;
use crate::xslt_engine::xslt_engine::XsltEngine;

/// The engines this build can offer, behind one dispatch point.
pub enum Backend {
    #[cfg(feature = "libxslt")]
    LibXslt(LibXsltEngine),
    Xrust(XrustEngine),
}

impl Backend {
    /// Capability probe. Prefers the native libxslt engine when compiled
    /// in, falls back to the pure-Rust engine otherwise.
    pub fn detect() -> Option<Backend> {
        #[cfg(feature = "libxslt")]
        let backend = Backend::LibXslt(LibXsltEngine::with_default_scratch_dir());
        #[cfg(not(feature = "libxslt"))]
        let backend = Backend::Xrust(XrustEngine::new());

        debug!(backend = backend.name(), "XSLT backend selected");
        Some(backend)
    }

    pub fn name(&self) -> &'static str {
        match self {
            #[cfg(feature = "libxslt")]
            Backend::LibXslt(_) => "libxslt",
            Backend::Xrust(_) => "xrust",
        }
    }

    /// One full parse, compile, apply pass. The source document is checked
    /// before the stylesheet so a bad document wins when both are bad.
    pub fn run(&self, xml: &str, xslt: &str) -> Result<String, TransformError> {
        match self {
            #[cfg(feature = "libxslt")]
            Backend::LibXslt(engine) => run_engine(engine, xml, xslt),
            Backend::Xrust(engine) => run_engine(engine, xml, xslt),
        }
    }
}

fn run_engine<E>(engine: &E, xml: &str, xslt: &str) -> Result<String, TransformError>
where
    E: XsltEngine<Error = TransformError>,
{
    let source = engine.parse_source(xml)?;
    let mut compiled = engine.compile(xslt)?;
    engine.transform(&mut compiled, &source)
}
