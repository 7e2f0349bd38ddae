//! Scrape endpoint.
//!
//! - `/metrics` : Prometheus text format, computed fresh per request

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use owui_exporter_core::expo;

use crate::app_state::AppState;

/// Handle one scrape: fetch a fresh snapshot, render it, or fail the whole
/// request. Upstream failure detail stays in the server logs; the caller
/// only sees a generic 500 body with no partial metric lines.
pub async fn metrics(State(state): State<AppState>) -> Response {
    match state.upstream().fetch_stats().await {
        Ok(snap) => (
            StatusCode::OK,
            [(axum::http::header::CONTENT_TYPE, expo::TEXT_FORMAT_CONTENT_TYPE)],
            expo::render_snapshot(&snap),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "scrape failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch metrics").into_response()
        }
    }
}
