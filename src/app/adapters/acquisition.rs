//! Acquisition adapter for the raw listing text
//!
//! Retrieves the listing page over HTTP or from a local copy and isolates the
//! listing text block from the surrounding markup. The parser downstream is
//! agnostic to provenance; everything here ends in a single raw text string.
//!
//! A failed retrieval surfaces as [`Error::Acquisition`], distinguishable
//! from a successful fetch of an empty listing, so the pipeline can abort
//! without writing partial outputs.
//!
//! [`Error::Acquisition`]: crate::Error::Acquisition

use crate::constants::{LISTING_BLOCK_END, LISTING_BLOCK_START};
use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, info};

/// Fetch the listing page from a remote source and extract the listing text
pub fn fetch_listing(url: &str) -> Result<String> {
    info!("Fetching listing from {}", url);

    let response = reqwest::blocking::get(url)
        .map_err(|error| Error::acquisition(url, "request failed", Some(error)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::acquisition(
            url,
            format!("unexpected HTTP status {}", status),
            None,
        ));
    }

    let page = response
        .text()
        .map_err(|error| Error::acquisition(url, "failed to read response body", Some(error)))?;

    extract_listing(&page)
}

/// Read a locally saved listing page and extract the listing text
pub fn load_local(path: &Path) -> Result<String> {
    info!("Reading listing page from {}", path.display());

    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let page = std::fs::read_to_string(path)
        .map_err(|error| Error::io(format!("failed to read '{}'", path.display()), error))?;

    extract_listing(&page)
}

/// Isolate the listing text block from the page markup
///
/// The listing sits between the first `<pre>` marker and the following
/// `</pre>`. A leading newline directly after the opening marker is not part
/// of the listing.
pub fn extract_listing(page: &str) -> Result<String> {
    let start = page.find(LISTING_BLOCK_START).ok_or_else(|| {
        Error::markup_extraction(format!(
            "opening marker '{}' not found in page",
            LISTING_BLOCK_START
        ))
    })?;

    let body = &page[start + LISTING_BLOCK_START.len()..];
    let end = body.find(LISTING_BLOCK_END).ok_or_else(|| {
        Error::markup_extraction(format!(
            "closing marker '{}' not found in page",
            LISTING_BLOCK_END
        ))
    })?;

    let block = &body[..end];
    let block = block.strip_prefix('\n').unwrap_or(block);

    debug!("Extracted listing block of {} byte(s)", block.len());
    Ok(block.to_string())
}
