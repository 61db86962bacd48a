//! Test utilities for exporter testing

use crate::app::models::Location;


/// A small location collection covering escaping and quoting edge cases
pub fn sample_locations() -> Vec<Location> {
    vec![
        Location::new("alice", 51.5074, -0.1278, "London, UK").unwrap(),
        Location::new("bob", 48.8566, 2.3522, "").unwrap(),
        Location::new("carol & dave", 40.7128, -74.006, "<3 New York").unwrap(),
    ]
}

/// A single-record collection for byte-exact document assertions
pub fn single_location() -> Vec<Location> {
    vec![Location::new("alice", 51.5074, -0.1278, "London, UK").unwrap()]
}
