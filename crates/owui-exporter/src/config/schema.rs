use serde::Deserialize;

use owui_exporter_core::error::{ExporterError, Result};

/// Immutable process-lifetime configuration, constructed once at startup and
/// passed into the handlers through `AppState`. Request-handling code never
/// reads the ambient environment.
#[derive(Debug, Clone, Deserialize)]
pub struct ExporterConfig {
    /// Upstream base URL, e.g. `https://owui.example.com`. Env: `OWUI_BASE_URL`.
    pub owui_base_url: String,

    /// Bearer token for the upstream API. Env: `OWUI_JWT`.
    pub owui_jwt: String,

    /// Listen port for the scrape endpoint. Env: `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl ExporterConfig {
    /// Reject empty required values and normalize the base URL so path
    /// joining is uniform. Consumes and returns self so loading reads as a
    /// single pipeline.
    pub fn validate(mut self) -> Result<Self> {
        if self.owui_base_url.trim().is_empty() {
            return Err(ExporterError::Config("OWUI_BASE_URL must not be empty".into()));
        }
        if self.owui_jwt.trim().is_empty() {
            return Err(ExporterError::Config("OWUI_JWT must not be empty".into()));
        }

        while self.owui_base_url.ends_with('/') {
            self.owui_base_url.pop();
        }

        Ok(self)
    }

    /// Socket address string for the listener.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
