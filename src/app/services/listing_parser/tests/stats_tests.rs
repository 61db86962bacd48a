//! Tests for parsing statistics

use crate::app::services::listing_parser::ParseStats;

#[test]
fn test_new_stats_are_zeroed() {
    let stats = ParseStats::new();
    assert_eq!(stats.total_lines, 0);
    assert_eq!(stats.locations_parsed, 0);
    assert_eq!(stats.lines_skipped, 0);
}

#[test]
fn test_success_rate() {
    let stats = ParseStats {
        total_lines: 8,
        locations_parsed: 6,
        lines_skipped: 2,
    };
    assert!((stats.success_rate() - 75.0).abs() < f64::EPSILON);
}

#[test]
fn test_success_rate_with_no_lines() {
    let stats = ParseStats::new();
    assert_eq!(stats.success_rate(), 0.0);
}

#[test]
fn test_default_matches_new() {
    let stats = ParseStats::default();
    assert_eq!(stats.total_lines, ParseStats::new().total_lines);
    assert_eq!(stats.locations_parsed, 0);
}
