use tracing::debug;

use crate::errors::transform_errors::TransformError;
use crate::xslt_engine::backend::Backend;

/// Validates inputs, checks host capability, and drives the selected
/// backend through one parse-and-transform pass per call. Holds no state
/// beyond the backend; calls are independent of each other.
pub struct XmlTransformer {
    backend: Option<Backend>,
}

impl XmlTransformer {
    /// Probe the host for an XSLT backend.
    pub fn new() -> Self {
        XmlTransformer {
            backend: Backend::detect(),
        }
    }

    /// Use a specific backend instead of probing.
    pub fn with_backend(backend: Backend) -> Self {
        XmlTransformer {
            backend: Some(backend),
        }
    }

    /// A transformer on a host with no XSLT capability. Every call
    /// reports the unsupported condition.
    pub fn without_backend() -> Self {
        XmlTransformer { backend: None }
    }

    pub fn backend_name(&self) -> Option<&'static str> {
        self.backend.as_ref().map(Backend::name)
    }

    /// Transform `xml` with the `xslt` stylesheet.
    ///
    /// Conditions are checked in a fixed order: missing inputs, host
    /// capability, source document, stylesheet, evaluation. The first
    /// failed check wins.
    pub fn transform(&self, xml: &str, xslt: &str) -> Result<String, TransformError> {
        if let Some(missing) = TransformError::check_inputs(xml, xslt) {
            return Err(missing);
        }

        let backend = self.backend.as_ref().ok_or(TransformError::Unsupported)?;
        backend.run(xml, xslt)
    }

    /// Flat string channel: the transformed output, or the error display,
    /// or `"(empty)"` when the transform produced zero-length text. Never
    /// panics, always returns a non-empty string.
    pub fn transform_to_string(&self, xml: &str, xslt: &str) -> String {
        match self.transform(xml, xslt) {
            Ok(out) if out.is_empty() => "(empty)".to_string(),
            Ok(out) => out,
            Err(err) => {
                debug!(%err, "transform reported as diagnostic string");
                err.to_string()
            }
        }
    }
}

impl Default for XmlTransformer {
    fn default() -> Self {
        Self::new()
    }
}
