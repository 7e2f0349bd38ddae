//! Exporter config loader (environment-backed).
//!
//! `envy` maps `OWUI_BASE_URL`, `OWUI_JWT`, and `PORT` onto the schema
//! struct; an optional local `.env` file may pre-populate the environment
//! without overriding variables already set. Required values missing at
//! startup are fatal before any listener binds.

pub mod schema;

use owui_exporter_core::error::{ExporterError, Result};

pub use schema::ExporterConfig;

/// Load `.env` (best effort), then the process environment.
pub fn load_from_env() -> Result<ExporterConfig> {
    // dotenvy never overrides variables that are already set, and a missing
    // file is not an error.
    let _ = dotenvy::dotenv();

    let cfg: ExporterConfig = envy::from_env()
        .map_err(|e| ExporterError::Config(format!("missing or invalid environment: {e}")))?;
    cfg.validate()
}

/// Hermetic variant for tests: read from an explicit `(key, value)` set
/// instead of the process environment.
pub fn load_from_iter<I>(vars: I) -> Result<ExporterConfig>
where
    I: IntoIterator<Item = (String, String)>,
{
    let cfg: ExporterConfig = envy::from_iter(vars)
        .map_err(|e| ExporterError::Config(format!("missing or invalid environment: {e}")))?;
    cfg.validate()
}
