use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

/// Layout of tweet `created_at` strings, e.g. "Wed Oct 05 19:55:34 +0000 2022"
const TWITTER_LAYOUT: &str = "%a %b %d %H:%M:%S %z %Y";

pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

/// Epoch seconds to RFC 3339. Zero, negative and non-numeric values fall back to now.
pub fn positive_epoch_timestamp(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_f64)
        .filter(|secs| *secs > 0.0)
        .and_then(epoch_to_datetime)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(now_rfc3339)
}

/// Epoch seconds to RFC 3339. Any numeric value is accepted; anything else falls back to now.
pub fn epoch_timestamp(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_f64)
        .and_then(epoch_to_datetime)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(now_rfc3339)
}

fn epoch_to_datetime(secs: f64) -> Option<DateTime<Utc>> {
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1_000_000_000.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
}

/// Parse a tweet `created_at`, keeping the source offset. Falls back to now.
pub fn parse_twitter_timestamp(created_at: &str) -> String {
    DateTime::parse_from_str(created_at.trim(), TWITTER_LAYOUT)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|_| now_rfc3339())
}

/// Resolve relative text like "3 weeks ago" against `now`.
///
/// Units are checked in a fixed order (day, week, month, year, hour, minute) and
/// the first run of digits is the amount. Months are 30 days and years 365.
/// Anything unrecognised resolves to `now`.
pub fn resolve_relative_time(text: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    let text = text.trim();
    if text.is_empty() {
        return now;
    }

    let Some(amount) = first_number(text) else {
        return now;
    };

    let offset = if text.contains("day") {
        Duration::try_days(amount)
    } else if text.contains("week") {
        Duration::try_weeks(amount)
    } else if text.contains("month") {
        amount.checked_mul(30).and_then(Duration::try_days)
    } else if text.contains("year") {
        amount.checked_mul(365).and_then(Duration::try_days)
    } else if text.contains("hour") {
        Duration::try_hours(amount)
    } else if text.contains("minute") {
        Duration::try_minutes(amount)
    } else {
        None
    };

    offset
        .and_then(|d| now.checked_sub_signed(d))
        .unwrap_or(now)
}

pub fn relative_timestamp(text: &str) -> String {
    resolve_relative_time(text, Utc::now()).to_rfc3339()
}

fn first_number(text: &str) -> Option<i64> {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// `MM:SS`, or `HH:MM:SS` once the duration reaches an hour
pub fn format_duration(seconds: u64) -> String {
    if seconds == 0 {
        return "00:00".to_string();
    }

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}
