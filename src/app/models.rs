//! Data models for the geomap exporter
//!
//! This module contains the core record type representing one parsed listing
//! entry: a named point location with optional free-text metadata.

use crate::constants::{LATITUDE_MAX, LATITUDE_MIN, LONGITUDE_MAX, LONGITUDE_MIN};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// One parsed location entry from the community listing
///
/// A `Location` is constructed only by the listing parser, one per surviving
/// input line, and is never mutated afterwards. Exporters iterate collections
/// of locations in source order.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Location {
    /// Display name for the entry (e.g. a member handle or place label)
    pub name: String,

    /// Latitude in WGS84 decimal degrees
    pub latitude: f64,

    /// Longitude in WGS84 decimal degrees
    pub longitude: f64,

    /// Optional free-text metadata, captured verbatim (empty when absent)
    pub comment: String,
}

impl Location {
    /// Create a new Location with validation
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        comment: impl Into<String>,
    ) -> Result<Self> {
        let location = Self {
            name: name.into(),
            latitude,
            longitude,
            comment: comment.into(),
        };

        location.validate()?;
        Ok(location)
    }

    /// Validate the record for valid ranges and required fields
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::data_validation(
                "Location name cannot be empty".to_string(),
            ));
        }

        if !(LATITUDE_MIN..=LATITUDE_MAX).contains(&self.latitude) {
            return Err(Error::data_validation(format!(
                "Invalid latitude {}: must be between {} and {} degrees",
                self.latitude, LATITUDE_MIN, LATITUDE_MAX
            )));
        }

        if !(LONGITUDE_MIN..=LONGITUDE_MAX).contains(&self.longitude) {
            return Err(Error::data_validation(format!(
                "Invalid longitude {}: must be between {} and {} degrees",
                self.longitude, LONGITUDE_MIN, LONGITUDE_MAX
            )));
        }

        Ok(())
    }
}
