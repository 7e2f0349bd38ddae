//! owui-exporter
//!
//! Prometheus sidecar for an Open WebUI instance:
//! - `GET /metrics` scrape endpoint on the configured port
//! - Two sequential upstream calls per scrape (user list, usage query)
//! - Stateless: every scrape is computed fresh, errors collapse to a 500

use tracing_subscriber::{fmt, EnvFilter};

use owui_exporter::{app_state, config, router};

fn fatal(context: &str, err: impl std::fmt::Display) -> ! {
    tracing::error!(error = %err, "{context}");
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // Config errors are fatal before any listener binds.
    let cfg = match config::load_from_env() {
        Ok(cfg) => cfg,
        Err(e) => fatal("config load failed", e),
    };
    let listen = cfg.listen_addr();

    let state = match app_state::AppState::new(cfg) {
        Ok(state) => state,
        Err(e) => fatal("startup failed", e),
    };
    let app = router::build_router(state);

    tracing::info!(%listen, "owui-exporter starting, exposing /metrics");
    let listener = match tokio::net::TcpListener::bind(&listen).await {
        Ok(l) => l,
        Err(e) => fatal("failed to bind", e),
    };

    if let Err(e) = axum::serve(listener, app).await {
        fatal("server failed", e);
    }
}
