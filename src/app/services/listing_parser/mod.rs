//! Parser for the human-maintained community location listing
//!
//! This module turns the raw listing text (one loosely formatted entry per
//! line) into an ordered collection of validated [`Location`] records. The
//! listing is human-authored and known to contain noise, so malformed lines
//! are skipped silently rather than surfaced as errors.
//!
//! ## Architecture
//!
//! - [`line`] - Tokenizer and parser for a single listing line
//! - [`parser`] - Whole-listing parsing orchestration
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use geomap_exporter::app::services::listing_parser;
//!
//! let raw = "51.5074,-0.1278 \"alice\" \"London, UK\"\nnot an entry\n";
//! let result = listing_parser::parse_listing_with_stats(raw);
//!
//! assert_eq!(result.locations.len(), 1);
//! assert_eq!(result.stats.lines_skipped, 1);
//! ```
//!
//! [`Location`]: crate::app::models::Location

pub mod line;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{parse_listing, parse_listing_with_stats};
pub use stats::{ParseResult, ParseStats};
