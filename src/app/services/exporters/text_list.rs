//! Plain-text list renderers
//!
//! The plain rendering is the canonical normalized form of the listing: one
//! line per record, `lat,long "name" "comment"`, re-parseable by the listing
//! parser. The pretty rendering carries the same content with the coordinate
//! and name columns padded for human readability.

use crate::app::models::Location;

/// Render the canonical plain list
pub fn render(locations: &[Location]) -> String {
    let mut rendered = String::new();

    for location in locations {
        rendered.push_str(&format!(
            "{},{} \"{}\" \"{}\"\n",
            location.latitude, location.longitude, location.name, location.comment
        ));
    }

    rendered
}

/// Render the pretty-aligned list
///
/// Semantically equivalent to [`render`]: columns are padded to the
/// collection-wide maximum width with a single space between them.
pub fn render_pretty(locations: &[Location]) -> String {
    let coordinate_width = locations
        .iter()
        .map(|location| coordinate_token(location).chars().count())
        .max()
        .unwrap_or(0);

    let name_width = locations
        .iter()
        .map(|location| location.name.chars().count() + 2)
        .max()
        .unwrap_or(0);

    let mut rendered = String::new();

    for location in locations {
        let coordinates = coordinate_token(location);
        let quoted_name = format!("\"{}\"", location.name);
        rendered.push_str(&format!(
            "{:<coordinate_width$} {:<name_width$} \"{}\"\n",
            coordinates, quoted_name, location.comment
        ));
    }

    rendered
}

fn coordinate_token(location: &Location) -> String {
    format!("{},{}", location.latitude, location.longitude)
}
