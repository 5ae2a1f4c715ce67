use chrono::{DateTime, NaiveDateTime, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const SECS_IN_MIN: i64 = 60;
    pub const SECS_IN_H: i64 = Self::SECS_IN_MIN * 60;
    pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

    // Naive layouts seen from the API (and hand-written fixtures); read as UTC
    const NAIVE_FORMATS: [&str; 3] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
}

/// Parse an API datetime string. RFC 3339 first, then the naive layouts as UTC.
pub fn parse_api_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    TimeUtils::NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Numeric, sortable plot axis value: seconds since the Unix epoch.
pub fn to_axis_secs(dt: &DateTime<Utc>) -> f64 {
    dt.timestamp_millis() as f64 / 1000.0
}

/// Axis label for a plot x value, e.g. "14:00". Empty for out-of-range values.
pub fn axis_secs_to_label(axis_secs: f64, format: &str) -> String {
    match DateTime::from_timestamp_millis((axis_secs * 1000.0).round() as i64) {
        Some(dt) => dt.format(format).to_string(),
        None => String::new(),
    }
}

pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format(TimeUtils::DISPLAY_TIME_FORMAT).to_string()
}
