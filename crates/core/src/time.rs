//! Timestamp helpers
//!
//! Notes carry ISO-8601 timestamps with millisecond precision and a `Z`
//! suffix (`2024-05-01T09:30:00.000Z`). Todo ids are creation times in
//! epoch milliseconds rendered as decimal strings.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a timestamp the way documents store it
pub fn to_iso(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a stored timestamp, `None` if it is not RFC 3339
pub fn parse_iso(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|at| at.with_timezone(&Utc))
}

/// Epoch milliseconds as a decimal string
pub fn millis_id(at: DateTime<Utc>) -> String {
    at.timestamp_millis().to_string()
}
