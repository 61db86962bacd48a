//! Export command implementation
//!
//! Acquires the raw listing, parses it and writes every requested export
//! format. Acquisition failure aborts before any file is written; a failed
//! write to one target does not stop the remaining targets.

use super::shared::{ExportStats, acquire_listing, print_summary, setup_logging};
use crate::app::adapters::filesystem;
use crate::app::services::exporters::{csv, geojson, kml, text_list};
use crate::app::services::listing_parser;
use crate::cli::args::ExportArgs;
use crate::config::ExportConfig;
use crate::{Error, Location, Result};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Export command runner
pub fn run_export(args: ExportArgs) -> Result<ExportStats> {
    let start_time = Instant::now();

    let config = args.to_config();
    setup_logging(&config.log_level)?;

    info!("Starting listing export");
    debug!("Export arguments: {:?}", args);

    args.validate()?;
    config.validate()?;

    // Acquisition failure aborts here, before any output target is touched
    let raw_listing = acquire_listing(args.url.as_deref(), args.file.as_deref())?;

    let parsed = listing_parser::parse_listing_with_stats(&raw_listing);
    info!(
        "Parsed {} location(s) from {} line(s) ({} skipped)",
        parsed.stats.locations_parsed, parsed.stats.total_lines, parsed.stats.lines_skipped
    );

    let mut stats = ExportStats::new();
    stats.locations_parsed = parsed.stats.locations_parsed;
    stats.lines_skipped = parsed.stats.lines_skipped;

    // No file targets: print the list to stdout and finish
    if config.targets.is_empty() {
        let rendered = render_list(&config, &parsed.locations);
        print!("{}", rendered);
        stats.duration = start_time.elapsed();
        return Ok(stats);
    }

    let mut failures: Vec<String> = Vec::new();

    if let Some(path) = &config.targets.list {
        let rendered = render_list(&config, &parsed.locations);
        write_target(path, &rendered, "list", &mut stats, &mut failures);
    }

    if let Some(path) = &config.targets.geojson {
        match geojson::render(&parsed.locations) {
            Ok(rendered) => write_target(path, &rendered, "geojson", &mut stats, &mut failures),
            Err(error) => record_failure("geojson", path, error, &mut failures),
        }
    }

    if let Some(path) = &config.targets.kml {
        let rendered = kml::render(&parsed.locations);
        write_target(path, &rendered, "kml", &mut stats, &mut failures);
    }

    if let Some(path) = &config.targets.csv {
        match csv::render(&parsed.locations) {
            Ok(rendered) => write_target(path, &rendered, "csv", &mut stats, &mut failures),
            Err(error) => record_failure("csv", path, error, &mut failures),
        }
    }

    stats.duration = start_time.elapsed();

    if !failures.is_empty() {
        return Err(Error::export(
            "output",
            format!(
                "{} of {} target(s) failed: {}",
                failures.len(),
                config.targets.count(),
                failures.join("; ")
            ),
        ));
    }

    if !args.quiet {
        print_summary(&stats);
    }

    Ok(stats)
}

fn render_list(config: &ExportConfig, locations: &[Location]) -> String {
    if config.pretty {
        text_list::render_pretty(locations)
    } else {
        text_list::render(locations)
    }
}

fn write_target(
    path: &Path,
    content: &str,
    format: &str,
    stats: &mut ExportStats,
    failures: &mut Vec<String>,
) {
    match filesystem::write_text(path, content) {
        Ok(()) => {
            info!("Wrote {} output to {}", format, path.display());
            stats.outputs_written.push(path.to_path_buf());
        }
        Err(error) => record_failure(format, path, error, failures),
    }
}

fn record_failure(format: &str, path: &Path, error: Error, failures: &mut Vec<String>) {
    warn!("Failed to produce {} output: {}", format, error);
    failures.push(format!("{} ({})", path.display(), error));
}
