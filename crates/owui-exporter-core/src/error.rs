//! Shared error type across owui-exporter crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, ExporterError>;

/// Unified error type used by the core crate and the exporter binary.
///
/// The scrape handler collapses every variant into a generic 500; the
/// distinction only matters for server-side logs and for startup, where a
/// `Config` error is fatal before any listener binds.
#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("config: {0}")]
    Config(String),
    #[error("upstream transport: {0}")]
    Transport(String),
    #[error("upstream decode: {0}")]
    Decode(String),
}

impl ExporterError {
    /// True for errors that must abort startup rather than surface per-scrape.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ExporterError::Config(_))
    }
}
