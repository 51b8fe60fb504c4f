//! Date helper functions

use chrono::{DateTime, NaiveDate};

/// Format an ISO date string using a Moment.js-compatible format string
///
/// Accepts plain dates (`2024-01-15`) and RFC 3339 date-times, which Notion
/// returns for dates with a time. Anything else is returned unchanged.
///
/// # Examples
/// ```ignore
/// display_date("2024-01-15", "YYYY.MM.DD") // -> "2024.01.15"
/// ```
pub fn display_date(iso: &str, format: &str) -> String {
    match parse_date(iso) {
        Some(date) => date.format(&moment_to_chrono_format(format)).to_string(),
        None => iso.to_string(),
    }
}

fn parse_date(iso: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(iso).ok().map(|dt| dt.date_naive()))
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest patterns first within each category
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("DDDD", "%j"),
        ("DD", "%d"),
        ("dddd", "%A"),
        ("ddd", "%a"),
    ];

    let mut result = format.to_string();

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}
