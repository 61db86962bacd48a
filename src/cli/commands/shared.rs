//! Shared infrastructure for CLI commands
//!
//! Logging setup, input acquisition dispatch and run statistics used by both
//! the export and check commands.

use crate::app::adapters::acquisition;
use crate::{Error, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Statistics for one export or check run
#[derive(Debug, Clone, Default)]
pub struct ExportStats {
    /// Number of locations parsed from the listing
    pub locations_parsed: usize,

    /// Number of listing lines skipped as unparseable
    pub lines_skipped: usize,

    /// File targets successfully written
    pub outputs_written: Vec<PathBuf>,

    /// Total run duration
    pub duration: Duration,
}

impl ExportStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }
}

/// Set up structured logging at the given level
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("geomap_exporter={}", log_level)));

    // try_init: a second in-process run keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Acquire the raw listing text from the configured input source
///
/// Exactly one of `url`/`file` is expected; argument validation enforces that
/// before this is called.
pub fn acquire_listing(url: Option<&str>, file: Option<&Path>) -> Result<String> {
    match (url, file) {
        (Some(url), None) => acquisition::fetch_listing(url),
        (None, Some(path)) => acquisition::load_local(path),
        _ => Err(Error::configuration(
            "Exactly one input source must be configured".to_string(),
        )),
    }
}

/// Print a human-readable run summary to stdout
pub fn print_summary(stats: &ExportStats) {
    println!();
    println!("{}", "Export complete".green().bold());
    println!(
        "  {} location(s) parsed, {} line(s) skipped",
        stats.locations_parsed, stats.lines_skipped
    );
    for path in &stats.outputs_written {
        println!("  {} {}", "wrote".cyan(), path.display());
    }
    println!("  finished in {:.2}s", stats.duration.as_secs_f64());
}
