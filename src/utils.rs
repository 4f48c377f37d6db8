use chrono::{DateTime, Utc};

/// Rounds `value` half away from zero to the given number of decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Converts a unix epoch (seconds) into a UTC timestamp.
///
/// Returns `None` for missing or out-of-range epochs.
pub fn utc_from_timestamp(epoch: Option<i64>) -> Option<DateTime<Utc>> {
    epoch.and_then(|secs| DateTime::from_timestamp(secs, 0))
}
