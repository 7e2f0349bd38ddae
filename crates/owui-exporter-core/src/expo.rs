//! Prometheus text exposition rendering (version 0.0.4).
//!
//! The exporter publishes exactly two gauges, rendered in a fixed order so
//! repeated scrapes against an unchanged upstream produce byte-identical
//! bodies. No labels, no histograms; just `# HELP` / `# TYPE` / value
//! blocks written into a `String`.

use std::fmt::Write;

use crate::upstream::StatsSnapshot;

/// Content type scrapers expect for the text format.
pub const TEXT_FORMAT_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// A single unlabeled gauge.
struct Gauge {
    name: &'static str,
    help: &'static str,
    value: u64,
}

impl Gauge {
    fn render(&self, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", self.name, self.help);
        let _ = writeln!(out, "# TYPE {} gauge", self.name);
        let _ = writeln!(out, "{} {}", self.name, self.value);
    }
}

/// Render a snapshot as the full scrape body: logged-in gauge first, then
/// the total-users gauge.
pub fn render_snapshot(snap: &StatsSnapshot) -> String {
    let gauges = [
        Gauge {
            name: "owui_logged_in_users",
            help: "Number of users currently logged in",
            value: snap.logged_in,
        },
        Gauge {
            name: "owui_total_users",
            help: "Total number of registered users",
            value: snap.total,
        },
    ];

    let mut out = String::new();
    for g in &gauges {
        g.render(&mut out);
    }
    out
}
