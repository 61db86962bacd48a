//! Command implementations for the geomap exporter CLI
//!
//! Each command is implemented in its own module:
//! - `export`: acquisition, parsing and per-format output writing
//! - `check`: acquisition and parsing only, reporting listing health
//! - `shared`: logging setup, acquisition dispatch and run statistics

pub mod check;
pub mod export;
pub mod shared;

// Re-export the main types for convenient access
pub use shared::ExportStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the geomap exporter
pub fn run(args: Args) -> Result<ExportStats> {
    match args.get_command() {
        Commands::Export(export_args) => export::run_export(export_args),
        Commands::Check(check_args) => check::run_check(check_args),
    }
}
