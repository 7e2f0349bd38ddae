//! owui-exporter core: upstream wire contracts, error types, and the
//! Prometheus text rendering.
//!
//! This crate defines the data shapes shared by the exporter binary and its
//! tests. It intentionally carries no transport or runtime dependencies so
//! the rendering and decode logic can be exercised without a network.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `ExporterError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod expo;
pub mod upstream;

/// Shared result type.
pub use error::{ExporterError, Result};
pub use upstream::StatsSnapshot;
