//! Whole-listing parsing orchestration
//!
//! Splits the raw listing into logical lines, applies the line parser to each
//! in order and collects every surviving record. Parsing never fails: an
//! input producing zero valid lines yields an empty collection.

use super::line;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::Location;
use tracing::debug;

/// Parse the raw listing text into an ordered collection of locations
///
/// Source order is preserved; no sorting, no deduplication. Re-parsing the
/// normalized plain-list rendering of the result reproduces an equal
/// collection.
pub fn parse_listing(raw_listing: &str) -> Vec<Location> {
    parse_listing_with_stats(raw_listing).locations
}

/// Parse the raw listing text, also reporting per-line statistics
pub fn parse_listing_with_stats(raw_listing: &str) -> ParseResult {
    let mut locations = Vec::new();
    let mut stats = ParseStats::new();

    for raw_line in raw_listing.lines() {
        if raw_line.trim().is_empty() {
            continue;
        }
        stats.total_lines += 1;

        match line::parse_line(raw_line) {
            Some(location) => {
                locations.push(location);
                stats.locations_parsed += 1;
            }
            None => {
                stats.lines_skipped += 1;
                debug!("Skipping unparseable listing line: {:?}", raw_line);
            }
        }
    }

    debug!(
        "Parsed {} location(s) from {} line(s) ({} skipped)",
        stats.locations_parsed, stats.total_lines, stats.lines_skipped
    );

    ParseResult { locations, stats }
}
