#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use owui_exporter_core::expo::{render_snapshot, TEXT_FORMAT_CONTENT_TYPE};
use owui_exporter_core::StatsSnapshot;

#[test]
fn renders_two_gauge_blocks_in_fixed_order() {
    let body = render_snapshot(&StatsSnapshot { logged_in: 2, total: 3 });

    assert_eq!(
        body,
        "# HELP owui_logged_in_users Number of users currently logged in\n\
         # TYPE owui_logged_in_users gauge\n\
         owui_logged_in_users 2\n\
         # HELP owui_total_users Total number of registered users\n\
         # TYPE owui_total_users gauge\n\
         owui_total_users 3\n"
    );
}

#[test]
fn zero_counts_render_as_zero_not_blank() {
    let body = render_snapshot(&StatsSnapshot { logged_in: 0, total: 0 });
    assert!(body.contains("owui_logged_in_users 0\n"));
    assert!(body.contains("owui_total_users 0\n"));
}

#[test]
fn logged_in_above_total_passes_through() {
    // Display layer, not a validation layer: upstream inconsistency is
    // published as-is.
    let body = render_snapshot(&StatsSnapshot { logged_in: 5, total: 3 });
    assert!(body.contains("owui_logged_in_users 5\n"));
    assert!(body.contains("owui_total_users 3\n"));
}

#[test]
fn rendering_is_deterministic() {
    let snap = StatsSnapshot { logged_in: 7, total: 12 };
    assert_eq!(render_snapshot(&snap), render_snapshot(&snap));
}

#[test]
fn content_type_matches_text_format_version() {
    assert_eq!(TEXT_FORMAT_CONTENT_TYPE, "text/plain; version=0.0.4");
}
