//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// How many characters of a plant description the listing card shows.
const EXCERPT_LEN: usize = 80;

/// Truncates a description to a bounded prefix and appends an ellipsis.
///
/// Usage in templates: `{{ plant.description|excerpt }}`
#[askama::filter_fn]
pub fn excerpt(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(truncate_chars(&value.to_string()))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Char-boundary-safe prefix truncation with a trailing ellipsis marker.
fn truncate_chars(text: &str) -> String {
    let mut out: String = text.chars().take(EXCERPT_LEN).collect();
    out.push_str("...");
    out
}
