//! CSV renderer
//!
//! Emits a header row followed by one row per record in the fixed column
//! order `name,latitude,longitude,comment`. Fields containing the delimiter
//! or quote characters are quoted per standard CSV rules.

use crate::app::models::Location;
use crate::constants::CSV_HEADER;
use crate::{Error, Result};

/// Render the location collection as CSV text
pub fn render(locations: &[Location]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;

    for location in locations {
        let latitude = location.latitude.to_string();
        let longitude = location.longitude.to_string();
        writer.write_record([
            location.name.as_str(),
            latitude.as_str(),
            longitude.as_str(),
            location.comment.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| Error::export("csv", error.to_string()))?;

    String::from_utf8(bytes).map_err(|error| Error::export("csv", error.to_string()))
}
