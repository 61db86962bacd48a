//! Tokenizer and parser for a single listing line
//!
//! A listing line has the shape:
//!
//! ```text
//! <latitude>,<longitude> "<name>" "<comment>"
//! ```
//!
//! The field schema is explicit and ordered: the text before the first quote
//! is the coordinate token (required), the first quoted segment is the name
//! (required) and the second quoted segment is the comment (optional). Quoted
//! segments beyond the schema are ignored. Any line that does not satisfy the
//! schema yields a skip rather than an error.

use crate::app::models::Location;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Plain decimal syntax: optional sign, digits, optional fraction.
/// Scientific notation and non-finite values are deliberately rejected.
static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+(\.\d+)?$").expect("decimal pattern is valid"));

/// Punctuation tolerated around a coordinate token
const ENCLOSING_PUNCTUATION: [char; 4] = ['(', ')', '[', ']'];

/// Raw fields of one tokenized line, before numeric parsing
struct RawFields<'a> {
    coordinates: &'a str,
    name: Option<&'a str>,
    comment: Option<&'a str>,
}

/// Parse one raw listing line into a validated record
///
/// Returns `None` for every line that does not yield a valid record: blank
/// lines, lines without a name or coordinate pair, non-numeric or
/// out-of-range coordinates.
pub fn parse_line(line: &str) -> Option<Location> {
    let fields = tokenize(line)?;
    let (latitude, longitude) = parse_coordinate_pair(fields.coordinates)?;

    let name = fields.name?.trim();
    if name.is_empty() {
        return None;
    }

    let comment = fields.comment.map(str::trim).unwrap_or("");

    match Location::new(name, latitude, longitude, comment) {
        Ok(location) => Some(location),
        Err(error) => {
            debug!("Rejected listing entry '{}': {}", name, error);
            None
        }
    }
}

/// Split a line into its schema fields without interpreting them
fn tokenize(line: &str) -> Option<RawFields<'_>> {
    // Wiki authors sometimes prefix entries with a bullet
    let trimmed = line.trim().trim_start_matches('*').trim_start();
    if trimmed.is_empty() {
        return None;
    }

    // Quoted segments sit at the odd positions of a split on '"'
    let mut segments = trimmed.split('"');
    let coordinates = segments.next().unwrap_or("");
    let name = segments.next();
    let _separator = segments.next();
    let comment = segments.next();

    Some(RawFields {
        coordinates,
        name,
        comment,
    })
}

/// Split a coordinate token into a (latitude, longitude) pair
///
/// The pair is comma-separated, falling back to whitespace separation when no
/// comma is present. Exactly two numeric tokens are required.
fn parse_coordinate_pair(token: &str) -> Option<(f64, f64)> {
    let token = token.trim();

    let parts: Vec<&str> = if token.contains(',') {
        token.split(',').map(str::trim).collect()
    } else {
        token.split_whitespace().collect()
    };

    if parts.len() != 2 {
        return None;
    }

    let latitude = parse_decimal(parts[0])?;
    let longitude = parse_decimal(parts[1])?;
    Some((latitude, longitude))
}

/// Parse a single decimal token, stripping enclosing punctuation
fn parse_decimal(token: &str) -> Option<f64> {
    let token = token.trim_matches(ENCLOSING_PUNCTUATION.as_slice()).trim();

    if !DECIMAL_RE.is_match(token) {
        return None;
    }

    token.parse().ok()
}
