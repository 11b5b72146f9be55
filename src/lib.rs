//! XML to text/HTML transformation filter over pluggable XSLT engines.
//!
//! The crate exposes one operation: transform an XML document with an
//! XSLT stylesheet, both given as strings. Failures never panic; the
//! primary API returns a tagged [`TransformError`], and a compatibility
//! wrapper flattens everything to a single human-readable string for
//! template-rendering call sites.
//!
//! Engines are pluggable behind the [`XsltEngine`] trait. A pure-Rust
//! xrust backend is always compiled in; the `libxslt` cargo feature adds
//! a native libxml2/libxslt backend, preferred by the capability probe
//! when present.
//!
//! ```rust
//! use xslt_filter::XmlTransformer;
//!
//! let transformer = XmlTransformer::new();
//! let out = transformer.transform_to_string(
//!     "<a>1</a>",
//!     r#"<xsl:stylesheet version="1.0"
//!           xmlns:xsl="http://www.w3.org/1999/XSL/Transform">
//!         <xsl:template match="/"><xsl:value-of select="child::a"/></xsl:template>
//!     </xsl:stylesheet>"#,
//! );
//! assert_eq!(out, "1");
//! ```

pub mod errors;
pub mod transformer;
pub mod xslt_engine;

pub use errors::transform_errors::{MissingPart, TransformError};
pub use transformer::filter::xslt;
pub use transformer::transformer::XmlTransformer;
pub use xslt_engine::backend::Backend;
#[cfg(feature = "libxslt")]
pub use xslt_engine::libxslt_engine::LibXsltEngine;
pub use xslt_engine::xrust_engine::XrustEngine;
pub use xslt_engine::xslt_engine::XsltEngine;
