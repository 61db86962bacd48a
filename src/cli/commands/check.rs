//! Check command implementation
//!
//! Acquires and parses the listing without writing any output, reporting how
//! healthy the human-maintained source currently is.

use super::shared::{ExportStats, acquire_listing, setup_logging};
use crate::app::services::listing_parser;
use crate::cli::args::CheckArgs;
use crate::Result;
use colored::Colorize;
use std::time::Instant;
use tracing::{debug, info};

/// Check command runner
pub fn run_check(args: CheckArgs) -> Result<ExportStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;

    info!("Starting listing check");
    debug!("Check arguments: {:?}", args);

    args.validate()?;

    let raw_listing = acquire_listing(args.url.as_deref(), args.file.as_deref())?;
    let parsed = listing_parser::parse_listing_with_stats(&raw_listing);

    println!("{}", "Listing check".bold());
    println!("  lines:   {}", parsed.stats.total_lines);
    println!(
        "  parsed:  {}",
        parsed.stats.locations_parsed.to_string().green()
    );
    println!(
        "  skipped: {}",
        parsed.stats.lines_skipped.to_string().yellow()
    );
    println!("  success: {:.1}%", parsed.stats.success_rate());

    let stats = ExportStats {
        locations_parsed: parsed.stats.locations_parsed,
        lines_skipped: parsed.stats.lines_skipped,
        outputs_written: Vec::new(),
        duration: start_time.elapsed(),
    };

    Ok(stats)
}
