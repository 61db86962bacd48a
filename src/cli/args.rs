//! Command-line argument definitions for the geomap exporter
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::config::{ExportConfig, OutputTargets};
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the geomap exporter
///
/// Converts a human-maintained community location listing into plain-text,
/// GeoJSON, KML and CSV map exports.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "geomap-exporter",
    version,
    about = "Convert a community location listing into plain-text, GeoJSON, KML and CSV exports",
    long_about = "Retrieves a human-maintained location listing (from a wiki page URL or a saved \
                  local copy), parses its loosely formatted entries into validated records and \
                  re-serializes them deterministically into a normalized plain-text list, GeoJSON, \
                  KML and CSV. Malformed listing lines are skipped; surviving records round-trip \
                  byte-for-byte through the plain-text form."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the geomap exporter
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse the listing and write the requested export formats (default command)
    Export(ExportArgs),
    /// Parse the listing and report statistics without writing any output
    Check(CheckArgs),
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// URL of the listing page to fetch
    ///
    /// The page markup must contain the listing inside a <pre> block.
    /// Mutually exclusive with --file.
    #[arg(
        short = 'u',
        long = "url",
        value_name = "URL",
        help = "URL of the listing page to fetch"
    )]
    pub url: Option<String>,

    /// Local copy of the listing page
    ///
    /// A saved HTML page containing the listing inside a <pre> block.
    /// Mutually exclusive with --url.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "PATH",
        conflicts_with = "url",
        help = "Local copy of the listing page"
    )]
    pub file: Option<PathBuf>,

    /// Output file for the normalized plain-text list
    #[arg(
        long = "list",
        value_name = "PATH",
        help = "Output file for the normalized plain-text list"
    )]
    pub list: Option<PathBuf>,

    /// Output file for the GeoJSON FeatureCollection
    #[arg(
        long = "geojson",
        value_name = "PATH",
        help = "Output file for the GeoJSON FeatureCollection"
    )]
    pub geojson: Option<PathBuf>,

    /// Output file for the KML document
    #[arg(
        long = "kml",
        value_name = "PATH",
        help = "Output file for the KML document"
    )]
    pub kml: Option<PathBuf>,

    /// Output file for the CSV export
    #[arg(
        long = "csv",
        value_name = "PATH",
        help = "Output file for the CSV export"
    )]
    pub csv: Option<PathBuf>,

    /// Align the plain-text list into padded columns
    ///
    /// Applies to the --list output (and to stdout when no file target is
    /// given). The aligned form carries the same content as the canonical
    /// form and remains re-parseable.
    #[arg(long = "pretty", help = "Align the plain-text list into padded columns")]
    pub pretty: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// URL of the listing page to fetch
    #[arg(
        short = 'u',
        long = "url",
        value_name = "URL",
        help = "URL of the listing page to fetch"
    )]
    pub url: Option<String>,

    /// Local copy of the listing page
    #[arg(
        short = 'f',
        long = "file",
        value_name = "PATH",
        conflicts_with = "url",
        help = "Local copy of the listing page"
    )]
    pub file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ExportArgs {
    /// Validate the export command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_source(self.url.as_deref(), self.file.as_deref())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the pipeline configuration from the parsed arguments
    pub fn to_config(&self) -> ExportConfig {
        ExportConfig {
            pretty: self.pretty,
            log_level: self.get_log_level().to_string(),
            targets: OutputTargets {
                list: self.list.clone(),
                geojson: self.geojson.clone(),
                kml: self.kml.clone(),
                csv: self.csv.clone(),
            },
        }
    }
}

impl CheckArgs {
    /// Validate the check command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_source(self.url.as_deref(), self.file.as_deref())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Require exactly one input source and check a local file exists
fn validate_input_source(url: Option<&str>, file: Option<&std::path::Path>) -> Result<()> {
    match (url, file) {
        (None, None) => Err(Error::configuration(
            "No input source: specify --url or --file".to_string(),
        )),
        (Some(url), None) => {
            if url.trim().is_empty() {
                return Err(Error::configuration("URL cannot be empty".to_string()));
            }
            Ok(())
        }
        (None, Some(path)) => {
            if !path.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    path.display()
                )));
            }
            if !path.is_file() {
                return Err(Error::configuration(format!(
                    "Input path is not a file: {}",
                    path.display()
                )));
            }
            Ok(())
        }
        (Some(_), Some(_)) => Err(Error::configuration(
            "Specify only one of --url or --file".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn base_export_args() -> ExportArgs {
        ExportArgs {
            url: None,
            file: None,
            list: None,
            geojson: None,
            kml: None,
            csv: None,
            pretty: false,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_missing_input_source_rejected() {
        let args = base_export_args();
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_url_input_accepted() {
        let mut args = base_export_args();
        args.url = Some("https://example.org/listing".to_string());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_empty_url_rejected() {
        let mut args = base_export_args();
        args.url = Some("   ".to_string());
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_existing_file_input_accepted() {
        let mut page_file = NamedTempFile::new().unwrap();
        write!(page_file, "<pre></pre>").unwrap();

        let mut args = base_export_args();
        args.file = Some(page_file.path().to_path_buf());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_missing_file_input_rejected() {
        let mut args = base_export_args();
        args.file = Some(PathBuf::from("/nonexistent/listing.html"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = base_export_args();
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_to_config_carries_targets() {
        let mut args = base_export_args();
        args.pretty = true;
        args.list = Some(PathBuf::from("out.txt"));
        args.kml = Some(PathBuf::from("out.kml"));

        let config = args.to_config();
        assert!(config.pretty);
        assert_eq!(config.targets.count(), 2);
        assert_eq!(config.targets.list, Some(PathBuf::from("out.txt")));
        assert!(config.targets.geojson.is_none());
    }
}
