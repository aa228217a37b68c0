//! Locale coercion for Swedish-formatted cells.

use chrono::NaiveDate;

/// Coerce a source-locale decimal string to f64.
///
/// The exports write `1 000 000` or `1.234,56`: spaces (plain or no-break)
/// and periods are thousands separators, the comma is the decimal
/// separator. Strips the separators, swaps the comma for a period, then
/// parses. Anything that still fails becomes `None`; the row is kept.
pub fn normalize_decimal(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '\u{a0}' | '.'))
        .map(|ch| if ch == ',' { '.' } else { ch })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Coerce an integer-valued cell (trim and parse, `None` on failure).
pub fn normalize_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Coerce a date cell, assuming year-month-day order.
///
/// Returns the validated date as an ISO-8601 string. Malformed values
/// become `None` rather than rejecting the row.
pub fn normalize_date(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%Y-%m-%d").to_string())
}
