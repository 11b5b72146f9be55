pub mod backend;
#[cfg(feature = "libxslt")]
pub mod libxslt_engine;
pub mod xrust_engine;
pub mod xslt_engine;
