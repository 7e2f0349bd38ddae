//! Upstream HTTP client (the stats fetcher).

pub mod client;

pub use client::UpstreamClient;
