//! End-to-end pipeline tests against the committed fixtures
//!
//! The raw/cleaned fixture pair is the authoritative definition of the
//! listing grammar: the raw listing is the messy human-authored form, the
//! sample list is the canonical normalized rendering, and the per-format
//! samples are the expected exporter output for that record collection.

use geomap_exporter::Error;
use geomap_exporter::app::adapters::{acquisition, filesystem};
use geomap_exporter::app::services::exporters::{csv, geojson, kml, text_list};
use geomap_exporter::app::services::listing_parser;
use geomap_exporter::cli::args::ExportArgs;
use geomap_exporter::cli::commands::export;
use std::path::PathBuf;
use tempfile::TempDir;

const LISTING_PAGE: &str = include_str!("fixtures/listing-page.html");
const RAW_LISTING: &str = include_str!("fixtures/raw_listing.txt");
const SAMPLE_LIST: &str = include_str!("fixtures/sample_list.txt");
const SAMPLE_PRETTY_LIST: &str = include_str!("fixtures/sample_pretty_list.txt");
const SAMPLE_GEOJSON: &str = include_str!("fixtures/sample.geojson");
const SAMPLE_KML: &str = include_str!("fixtures/sample.kml");
const SAMPLE_CSV: &str = include_str!("fixtures/sample.csv");

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_markup_extraction_recovers_raw_listing() {
    let listing = acquisition::extract_listing(LISTING_PAGE).unwrap();
    assert_eq!(listing, RAW_LISTING);
}

#[test]
fn test_raw_and_cleaned_listings_parse_identically() {
    let from_raw = listing_parser::parse_listing(RAW_LISTING);
    let from_cleaned = listing_parser::parse_listing(SAMPLE_LIST);

    assert_eq!(from_raw.len(), 5);
    assert_eq!(from_raw, from_cleaned);
}

#[test]
fn test_plain_list_matches_fixture() {
    let locations = listing_parser::parse_listing(RAW_LISTING);
    assert_eq!(text_list::render(&locations), SAMPLE_LIST);
}

#[test]
fn test_pretty_list_matches_fixture() {
    let locations = listing_parser::parse_listing(RAW_LISTING);
    assert_eq!(text_list::render_pretty(&locations), SAMPLE_PRETTY_LIST);
}

#[test]
fn test_geojson_matches_fixture() {
    let locations = listing_parser::parse_listing(RAW_LISTING);
    assert_eq!(geojson::render(&locations).unwrap(), SAMPLE_GEOJSON);
}

#[test]
fn test_kml_matches_fixture() {
    let locations = listing_parser::parse_listing(RAW_LISTING);
    assert_eq!(kml::render(&locations), SAMPLE_KML);
}

#[test]
fn test_csv_matches_fixture() {
    let locations = listing_parser::parse_listing(RAW_LISTING);
    assert_eq!(csv::render(&locations).unwrap(), SAMPLE_CSV);
}

#[test]
fn test_round_trip_through_plain_list() {
    let first_pass = listing_parser::parse_listing(RAW_LISTING);
    let second_pass = listing_parser::parse_listing(&text_list::render(&first_pass));
    assert_eq!(first_pass, second_pass);
}

#[test]
fn test_written_files_match_returned_strings() {
    let locations = listing_parser::parse_listing(RAW_LISTING);
    let temp_dir = TempDir::new().unwrap();

    let rendered = [
        ("out.txt", text_list::render(&locations)),
        ("out.geojson", geojson::render(&locations).unwrap()),
        ("out.kml", kml::render(&locations)),
        ("out.csv", csv::render(&locations).unwrap()),
    ];

    for (file_name, content) in &rendered {
        let target = temp_dir.path().join(file_name);
        filesystem::write_text(&target, content).unwrap();
        let written = std::fs::read_to_string(&target).unwrap();
        assert_eq!(&written, content);
    }
}

#[test]
fn test_export_command_writes_all_fixture_outputs() {
    let temp_dir = TempDir::new().unwrap();
    let list = temp_dir.path().join("out.txt");
    let geojson_out = temp_dir.path().join("out.geojson");
    let kml_out = temp_dir.path().join("out.kml");
    let csv_out = temp_dir.path().join("out.csv");

    let args = ExportArgs {
        url: None,
        file: Some(fixture_path("listing-page.html")),
        list: Some(list.clone()),
        geojson: Some(geojson_out.clone()),
        kml: Some(kml_out.clone()),
        csv: Some(csv_out.clone()),
        pretty: false,
        verbose: 0,
        quiet: true,
    };

    let stats = export::run_export(args).unwrap();
    assert_eq!(stats.locations_parsed, 5);
    assert_eq!(stats.outputs_written.len(), 4);

    assert_eq!(std::fs::read_to_string(&list).unwrap(), SAMPLE_LIST);
    assert_eq!(std::fs::read_to_string(&geojson_out).unwrap(), SAMPLE_GEOJSON);
    assert_eq!(std::fs::read_to_string(&kml_out).unwrap(), SAMPLE_KML);
    assert_eq!(std::fs::read_to_string(&csv_out).unwrap(), SAMPLE_CSV);
}

#[test]
fn test_export_command_pretty_list() {
    let temp_dir = TempDir::new().unwrap();
    let list = temp_dir.path().join("pretty.txt");

    let args = ExportArgs {
        url: None,
        file: Some(fixture_path("listing-page.html")),
        list: Some(list.clone()),
        geojson: None,
        kml: None,
        csv: None,
        pretty: true,
        verbose: 0,
        quiet: true,
    };

    export::run_export(args).unwrap();
    assert_eq!(std::fs::read_to_string(&list).unwrap(), SAMPLE_PRETTY_LIST);
}

#[test]
fn test_unavailable_acquisition_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let list = temp_dir.path().join("out.txt");
    let csv_out = temp_dir.path().join("out.csv");

    let args = ExportArgs {
        url: None,
        file: Some(PathBuf::from("/nonexistent/listing.html")),
        list: Some(list.clone()),
        geojson: None,
        kml: None,
        csv: Some(csv_out.clone()),
        pretty: false,
        verbose: 0,
        quiet: true,
    };

    let result = export::run_export(args);
    assert!(result.is_err());
    assert!(!list.exists());
    assert!(!csv_out.exists());
}

#[test]
fn test_fetch_failure_is_distinguishable() {
    // Discard port on loopback: the connection is refused immediately
    let result = acquisition::fetch_listing("http://127.0.0.1:9/listing");
    assert!(matches!(result, Err(Error::Acquisition { .. })));
}

#[test]
fn test_empty_listing_produces_valid_empty_documents() {
    let locations = listing_parser::parse_listing("   \n\n  \t\n");
    assert!(locations.is_empty());

    assert_eq!(text_list::render(&locations), "");
    assert_eq!(
        geojson::render(&locations).unwrap(),
        "{\n  \"type\": \"FeatureCollection\",\n  \"features\": []\n}\n"
    );
    assert!(kml::render(&locations).contains("<Document>"));
    assert_eq!(csv::render(&locations).unwrap(), "name,latitude,longitude,comment\n");
}
