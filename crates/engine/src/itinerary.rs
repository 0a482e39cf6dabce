//! Rendering helpers for the itinerary view
//!
//! Small pure functions the presentation layer calls while drawing days
//! and stops. None of them touch the document.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use tripdeck_core::DayMeta;

/// Default width of a location before it is truncated
pub const LOCATION_MAX_LEN: usize = 20;

/// How far ahead a stop counts as upcoming
pub const UPCOMING_WINDOW_MINUTES: i64 = 30;

/// Tab label for a day: `"country - city"`, or just the country
pub fn day_label(meta: &DayMeta) -> String {
    match meta.city.as_deref().filter(|c| !c.is_empty()) {
        Some(city) => format!("{} - {}", meta.country, city),
        None => meta.country.clone(),
    }
}

/// Shorten `location` to `max` characters, marking the cut with `…`
pub fn truncate_location(location: &str, max: usize) -> String {
    match location.char_indices().nth(max) {
        Some((cut, _)) => format!("{}…", &location[..cut]),
        None => location.to_string(),
    }
}

/// Parse a stop time written as `H:MM` or `HH:MM`
pub fn parse_stop_time(time: &str) -> Option<NaiveTime> {
    let (hours, minutes) = time.split_once(':')?;
    let well_formed = (1..=2).contains(&hours.len())
        && minutes.len() == 2
        && hours.bytes().all(|b| b.is_ascii_digit())
        && minutes.bytes().all(|b| b.is_ascii_digit());
    if !well_formed {
        return None;
    }
    NaiveTime::from_hms_opt(hours.parse().ok()?, minutes.parse().ok()?, 0)
}

/// Whether a stop at `time` today starts within the next half hour
///
/// `now` is local wall-clock time. Malformed times are never upcoming.
pub fn is_upcoming(time: &str, now: NaiveDateTime) -> bool {
    let Some(at) = parse_stop_time(time) else {
        return false;
    };
    let stop_at = now.date().and_time(at);
    stop_at >= now && stop_at <= now + Duration::minutes(UPCOMING_WINDOW_MINUTES)
}
