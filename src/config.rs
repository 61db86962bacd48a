//! Configuration for the export pipeline.
//!
//! Verbosity and formatting options are explicit values threaded through the
//! pipeline call rather than ambient global state.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// File targets for each export format
///
/// A `None` target means that format is not produced in this run. Each target
/// is written independently; one failing write does not cancel the others.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputTargets {
    /// Normalized plain-text list (or pretty variant)
    pub list: Option<PathBuf>,

    /// GeoJSON FeatureCollection
    pub geojson: Option<PathBuf>,

    /// KML 2.2 document
    pub kml: Option<PathBuf>,

    /// CSV with header row
    pub csv: Option<PathBuf>,
}

impl OutputTargets {
    /// Check whether any file target is configured
    pub fn is_empty(&self) -> bool {
        self.list.is_none() && self.geojson.is_none() && self.kml.is_none() && self.csv.is_none()
    }

    /// Number of configured file targets
    pub fn count(&self) -> usize {
        [&self.list, &self.geojson, &self.kml, &self.csv]
            .iter()
            .filter(|target| target.is_some())
            .count()
    }
}

/// Configuration for one export run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Align the plain-text list into padded columns
    pub pretty: bool,

    /// Log level string ("error", "warn", "info", "debug", "trace")
    pub log_level: String,

    /// File targets for the requested formats
    pub targets: OutputTargets,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            log_level: "warn".to_string(),
            targets: OutputTargets::default(),
        }
    }
}

impl ExportConfig {
    /// Validate the configuration for consistency
    pub fn validate(&self) -> crate::Result<()> {
        const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(crate::Error::configuration(format!(
                "Unknown log level '{}'. Available levels: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        debug!(
            "Export configuration validated: {} file target(s), pretty={}",
            self.targets.count(),
            self.pretty
        );
        Ok(())
    }
}
