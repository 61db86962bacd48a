//! Parsing statistics and result structures for listing processing

use crate::app::models::Location;

/// Parsing result with location records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed location records, in source order
    pub locations: Vec<Location>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of non-blank lines encountered
    pub total_lines: usize,

    /// Number of locations successfully parsed
    pub locations_parsed: usize,

    /// Number of lines skipped as unparseable
    pub lines_skipped: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            locations_parsed: 0,
            lines_skipped: 0,
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.locations_parsed as f64 / self.total_lines as f64) * 100.0
        }
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
