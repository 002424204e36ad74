//! Long-form release date formatting for the details screen.

use chrono::NaiveDate;

/// Format an ISO release date as `March 5, 2021`.
///
/// Returns `None` for an empty date so the caller can hide the section.
/// Dates that do not parse are returned unchanged.
pub fn format_release_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date.format("%B %-d, %Y").to_string()),
        Err(_) => Some(raw.to_string()),
    }
}
