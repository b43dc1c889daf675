//! Best-effort date normalization.
//!
//! Marriage dates arrive from the upstream sheet in whatever shape the
//! spreadsheet happened to hold: RFC 3339, a pandas timestamp string, a
//! bare ISO date, or the sheet's own `DD-MM-YYYY` convention. A native
//! date input wants exactly `YYYY-MM-DD`, so everything funnels through
//! [`normalize_date_input`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y"];

/// Reformat an upstream date value as `YYYY-MM-DD`.
///
/// Returns an empty string when the input is empty or unparseable; callers
/// must treat that as "leave the date field unset", never as an error.
pub fn normalize_date_input(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return format_date(timestamp.with_timezone(&Utc).date_naive());
    }
    for format in DATETIME_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, format) {
            return format_date(timestamp.date());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return format_date(date);
        }
    }

    String::new()
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
