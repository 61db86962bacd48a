//! Export format renderers
//!
//! Each exporter is a pure function from an ordered location collection to a
//! complete output document. Renderers are deterministic, iterate records in
//! collection order and never mutate their input; persisting the rendered
//! text is the filesystem adapter's concern.
//!
//! ## Formats
//!
//! - [`text_list`] - Normalized plain-text list and pretty-aligned variant
//! - [`geojson`] - GeoJSON FeatureCollection with Point features
//! - [`kml`] - KML 2.2 document with one Placemark per record
//! - [`csv`] - CSV with header row and standard quoting

pub mod csv;
pub mod geojson;
pub mod kml;
pub mod text_list;

#[cfg(test)]
pub mod tests;
