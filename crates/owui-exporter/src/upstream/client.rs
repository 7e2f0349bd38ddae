//! Stats fetcher: two sequential authenticated GETs against the upstream.
//!
//! Per scrape:
//! 1. List users (fixed pagination/order) -> total = users.len(), collect IDs
//! 2. Query usage with those IDs -> logged_in = active user_ids.len()
//!
//! Each call is bounded by a 5 second timeout (worst case ~10s per scrape).
//! Any transport failure, non-success status, or decode failure aborts the
//! whole fetch; there is no retry and no partial result.

use std::time::Duration;

use serde::de::DeserializeOwned;

use owui_exporter_core::error::{ExporterError, Result};
use owui_exporter_core::upstream::{StatsSnapshot, UsageQuery, UsageResponse, UserList};

use crate::config::ExporterConfig;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(5);

const USERS_PATH: &str = "/api/v1/users/?page=0&order_by=created_at&direction=asc";
const USAGE_PATH: &str = "/api/usage";

/// Authenticated client for the upstream API. Holds one shared
/// `reqwest::Client` built at startup; cheap to clone.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl UpstreamClient {
    pub fn new(cfg: &ExporterConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .map_err(|e| ExporterError::Config(format!("http client build failed: {e}")))?;

        Ok(Self {
            http,
            base_url: cfg.owui_base_url.clone(),
            token: cfg.owui_jwt.clone(),
        })
    }

    /// Produce a fresh snapshot from the two upstream calls.
    pub async fn fetch_stats(&self) -> Result<StatsSnapshot> {
        let users = self.list_users().await?;
        let usage = self.query_usage(users.user_ids()).await?;

        let snap = StatsSnapshot::new(&users, &usage);
        tracing::debug!(logged_in = snap.logged_in, total = snap.total, "fetched upstream stats");
        Ok(snap)
    }

    async fn list_users(&self) -> Result<UserList> {
        let req = self
            .http
            .get(format!("{}{}", self.base_url, USERS_PATH))
            .bearer_auth(&self.token);
        decode_response(req.send().await, USERS_PATH).await
    }

    async fn query_usage(&self, user_ids: Vec<String>) -> Result<UsageResponse> {
        // The usage endpoint takes a JSON body on a GET request.
        let req = self
            .http
            .get(format!("{}{}", self.base_url, USAGE_PATH))
            .bearer_auth(&self.token)
            .json(&UsageQuery::for_users(user_ids));
        decode_response(req.send().await, USAGE_PATH).await
    }
}

/// Map the send/status/decode stages onto the error taxonomy. Status is
/// checked before decode so a JSON error body is never mistaken for data.
async fn decode_response<T: DeserializeOwned>(
    sent: std::result::Result<reqwest::Response, reqwest::Error>,
    path: &str,
) -> Result<T> {
    let resp = sent.map_err(|e| ExporterError::Transport(format!("{path}: {e}")))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ExporterError::Transport(format!("{path}: unexpected status {status}")));
    }

    resp.json::<T>()
        .await
        .map_err(|e| ExporterError::Decode(format!("{path}: {e}")))
}
