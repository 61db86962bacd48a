use clap::Parser;
use geomap_exporter::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - results have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Geomap Exporter - Community Location Listing Converter");
    println!("======================================================");
    println!();
    println!("Parse a human-maintained community location listing and convert it");
    println!("into plain-text, GeoJSON, KML and CSV map exports.");
    println!();
    println!("USAGE:");
    println!("    geomap-exporter <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    export    Parse the listing and write the requested formats (main command)");
    println!("    check     Parse the listing and report statistics without writing output");
    println!("    help      Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Export every format from a saved listing page:");
    println!("    geomap-exporter export --file listing.html \\");
    println!("                           --list out.txt --geojson out.geojson \\");
    println!("                           --kml out.kml --csv out.csv");
    println!();
    println!("    # Print the pretty-aligned list to stdout:");
    println!("    geomap-exporter export --url https://example.org/listing --pretty");
    println!();
    println!("    # Check how many listing lines currently parse:");
    println!("    geomap-exporter check --file listing.html");
    println!();
    println!("For detailed help on any command, use:");
    println!("    geomap-exporter <COMMAND> --help");
}
