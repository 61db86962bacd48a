//! KML renderer
//!
//! Emits a KML 2.2 document with one `<Placemark>` per record. The
//! `<description>` element is omitted when the comment is empty. Coordinate
//! triples follow the KML `longitude,latitude,altitude` order.

use crate::app::models::Location;
use crate::constants::{KML_ALTITUDE, KML_NAMESPACE};

/// Render the location collection as a KML document
pub fn render(locations: &[Location]) -> String {
    let mut document = String::new();

    document.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    document.push_str(&format!("<kml xmlns=\"{}\">\n", KML_NAMESPACE));
    document.push_str("  <Document>\n");

    for location in locations {
        document.push_str("    <Placemark>\n");
        document.push_str(&format!(
            "      <name>{}</name>\n",
            escape_xml(&location.name)
        ));
        if !location.comment.is_empty() {
            document.push_str(&format!(
                "      <description>{}</description>\n",
                escape_xml(&location.comment)
            ));
        }
        document.push_str("      <Point>\n");
        document.push_str(&format!(
            "        <coordinates>{},{},{}</coordinates>\n",
            location.longitude, location.latitude, KML_ALTITUDE
        ));
        document.push_str("      </Point>\n");
        document.push_str("    </Placemark>\n");
    }

    document.push_str("  </Document>\n");
    document.push_str("</kml>\n");

    document
}

/// Escape the XML special characters allowed in free-text fields
fn escape_xml(text: &str) -> String {
    // '&' must be replaced first
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
