//! Shared application state for the exporter.
//!
//! Holds the immutable startup config and the upstream client behind an
//! `Arc`. There is no other shared state: every scrape computes its
//! snapshot from scratch and discards it after the response is written.

use std::sync::Arc;

use owui_exporter_core::error::Result;

use crate::config::ExporterConfig;
use crate::upstream::UpstreamClient;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    upstream: UpstreamClient,
}

impl AppState {
    /// Build application state. Returns Result so main can handle errors
    /// gracefully (no panic).
    pub fn new(cfg: ExporterConfig) -> Result<Self> {
        let upstream = UpstreamClient::new(&cfg)?;
        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, upstream }),
        })
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn upstream(&self) -> &UpstreamClient {
        &self.inner.upstream
    }
}
