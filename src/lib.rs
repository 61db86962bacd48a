//! Geomap Exporter Library
//!
//! A Rust library for converting a human-maintained community location listing
//! into machine-readable geographic export formats.
//!
//! This library provides tools for:
//! - Extracting the listing text block from its surrounding wiki markup
//! - Parsing loosely formatted listing lines into validated location records
//! - Rendering a record collection as a normalized plain-text list (with an
//!   optional pretty-aligned variant), GeoJSON, KML and CSV
//! - Writing rendered output to per-format file targets

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod exporters;
        pub mod listing_parser;
    }
    pub mod adapters {
        pub mod acquisition;
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::Location;
pub use config::{ExportConfig, OutputTargets};

/// Result type alias for the geomap exporter
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for listing acquisition, parsing and export operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Listing could not be retrieved from the remote source
    #[error("Listing unavailable from '{url}': {message}")]
    Acquisition {
        url: String,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Listing text block could not be isolated from the page markup
    #[error("Markup extraction error: {message}")]
    MarkupExtraction { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Export rendering error for a specific format
    #[error("Export error ({format}): {message}")]
    Export { format: String, message: String },

    /// Writing a rendered document to an output target failed
    #[error("Output write error for '{path}': {message}")]
    OutputWrite {
        path: String,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an acquisition error
    pub fn acquisition(
        url: impl Into<String>,
        message: impl Into<String>,
        source: Option<reqwest::Error>,
    ) -> Self {
        Self::Acquisition {
            url: url.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a markup extraction error
    pub fn markup_extraction(message: impl Into<String>) -> Self {
        Self::MarkupExtraction {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an export error for a specific format
    pub fn export(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Export {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Create an output write error
    pub fn output_write(
        path: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::OutputWrite {
            path: path.into(),
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Export {
            format: "geojson".to_string(),
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Export {
            format: "csv".to_string(),
            message: error.to_string(),
        }
    }
}
