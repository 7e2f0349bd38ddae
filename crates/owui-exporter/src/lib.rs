//! owui-exporter library entry.
//!
//! This crate wires the config loader, upstream client, and scrape handler
//! into the exporter service. It is intended to be consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod router;
pub mod scrape;
pub mod upstream;
