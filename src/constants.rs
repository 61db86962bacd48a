//! Application constants for the geomap exporter
//!
//! This module contains the markup markers, coordinate bounds and format
//! constants used throughout the export pipeline.

// =============================================================================
// Listing Markup Markers
// =============================================================================

/// Opening marker of the listing text block inside the page markup
pub const LISTING_BLOCK_START: &str = "<pre>";

/// Closing marker of the listing text block inside the page markup
pub const LISTING_BLOCK_END: &str = "</pre>";

// =============================================================================
// Coordinate Bounds (WGS84 decimal degrees)
// =============================================================================

pub const LATITUDE_MIN: f64 = -90.0;
pub const LATITUDE_MAX: f64 = 90.0;

pub const LONGITUDE_MIN: f64 = -180.0;
pub const LONGITUDE_MAX: f64 = 180.0;

// =============================================================================
// Export Format Constants
// =============================================================================

/// Column order for the CSV export header row
pub const CSV_HEADER: &[&str] = &["name", "latitude", "longitude", "comment"];

/// XML namespace for KML 2.2 documents
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// Altitude appended to every KML coordinate triple
pub const KML_ALTITUDE: &str = "0";
