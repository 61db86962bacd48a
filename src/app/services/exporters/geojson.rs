//! GeoJSON renderer
//!
//! Emits a single FeatureCollection with one Point feature per record.
//! GeoJSON axis order is `[longitude, latitude]`, reversed from the record's
//! natural lat/long order. Key order is fixed by the serde struct layout so
//! the output is byte-stable.

use crate::Result;
use crate::app::models::Location;
use serde::Serialize;

#[derive(Serialize)]
struct FeatureCollection<'a> {
    #[serde(rename = "type")]
    collection_type: &'static str,
    features: Vec<Feature<'a>>,
}

#[derive(Serialize)]
struct Feature<'a> {
    #[serde(rename = "type")]
    feature_type: &'static str,
    geometry: Geometry,
    properties: Properties<'a>,
}

#[derive(Serialize)]
struct Geometry {
    #[serde(rename = "type")]
    geometry_type: &'static str,
    /// [longitude, latitude] per the GeoJSON specification
    coordinates: [f64; 2],
}

#[derive(Serialize)]
struct Properties<'a> {
    name: &'a str,
    comment: &'a str,
}

/// Render the location collection as a pretty-printed FeatureCollection
pub fn render(locations: &[Location]) -> Result<String> {
    let collection = FeatureCollection {
        collection_type: "FeatureCollection",
        features: locations
            .iter()
            .map(|location| Feature {
                feature_type: "Feature",
                geometry: Geometry {
                    geometry_type: "Point",
                    coordinates: [location.longitude, location.latitude],
                },
                properties: Properties {
                    name: &location.name,
                    comment: &location.comment,
                },
            })
            .collect(),
    };

    let mut rendered = serde_json::to_string_pretty(&collection)?;
    rendered.push('\n');
    Ok(rendered)
}
