//! Test utilities for listing parser testing

use crate::app::models::Location;

mod stats_tests;

/// A small messy listing exercising the tolerated noise forms
pub fn sample_raw_listing() -> &'static str {
    "51.5074,-0.1278 \"alice\" \"London, UK\"\n\
     \n\
     48.8566 ,  2.3522 \"bob\"\n\
     * 40.7128, -74.006 \"carol & dave\" \"<3 New York\"\n\
     this line is not an entry\n\
     91.5,10.0 \"ghost\" \"latitude out of range\"\n\
     59.3293 18.0686 \"frank\" \"Stockholm\"\n"
}

/// The records the sample listing parses into
pub fn sample_locations() -> Vec<Location> {
    vec![
        Location::new("alice", 51.5074, -0.1278, "London, UK").unwrap(),
        Location::new("bob", 48.8566, 2.3522, "").unwrap(),
        Location::new("carol & dave", 40.7128, -74.006, "<3 New York").unwrap(),
        Location::new("frank", 59.3293, 18.0686, "Stockholm").unwrap(),
    ]
}
