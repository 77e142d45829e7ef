//! Syntactic checks on caller-supplied request parameters.
//!
//! Failures are [`CoreError::Validation`] carrying the message returned to
//! the client as a 400 response.

use crate::error::CoreError;
use crate::types::DbId;

/// Minimum length (in characters, after trimming) of a search term.
pub const MIN_SEARCH_LENGTH: usize = 2;

/// Parse a path segment as a numeric primary key.
///
/// `entity` is the lower-case noun used in the message, e.g.
/// `parse_id("abc", "episode")` fails with `Invalid episode ID`.
pub fn parse_id(raw: &str, entity: &str) -> Result<DbId, CoreError> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|_| CoreError::Validation(format!("Invalid {entity} ID")))
}

/// Trim a required search term and check its length.
pub fn search_term(raw: &str) -> Result<&str, CoreError> {
    let term = raw.trim();
    if term.chars().count() < MIN_SEARCH_LENGTH {
        return Err(CoreError::Validation(format!(
            "Search query must be at least {MIN_SEARCH_LENGTH} characters long"
        )));
    }
    Ok(term)
}

/// Like [`search_term`], but a missing or blank term means "no search".
pub fn optional_search_term(raw: Option<&str>) -> Result<Option<&str>, CoreError> {
    match raw.map(str::trim).filter(|t| !t.is_empty()) {
        None => Ok(None),
        Some(term) => search_term(term).map(Some),
    }
}

/// Trim a required free-text path value such as an affiliation name.
pub fn required_text<'a>(raw: &'a str, name: &str) -> Result<&'a str, CoreError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{name} parameter is required")));
    }
    Ok(value)
}

/// Reject non-finite bounds and an inverted price range.
pub fn price_range(min: Option<f64>, max: Option<f64>) -> Result<(), CoreError> {
    for (name, bound) in [("min_price", min), ("max_price", max)] {
        if bound.is_some_and(|v| !v.is_finite()) {
            return Err(CoreError::Validation(format!("{name} must be a finite number")));
        }
    }

    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(CoreError::Validation(
            "min_price cannot be greater than max_price".to_string(),
        )),
        _ => Ok(()),
    }
}
