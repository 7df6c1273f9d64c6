use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::{Asia::Manila, Tz};

/// Every date shown in the console is in Philippine time.
pub const APP_TIME_ZONE: Tz = Manila;

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&APP_TIME_ZONE)
}

pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

pub fn to_app_tz(value: DateTime<Utc>) -> DateTime<Tz> {
    value.with_timezone(&APP_TIME_ZONE)
}

pub fn format_timestamp(value: DateTime<Utc>) -> String {
    to_app_tz(value).format("%b %d, %Y %I:%M %p").to_string()
}

pub fn format_date(value: NaiveDate) -> String {
    value.format("%B %d, %Y").to_string()
}

/// `"13:05"` style API times rendered as `"1:05 PM"`; anything unparsable is returned as-is.
pub fn format_clock_time(raw: &str) -> String {
    let trimmed = raw.trim();
    chrono::NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| chrono::NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map(|time| time.format("%-I:%M %p").to_string())
        .unwrap_or_else(|_| trimmed.to_string())
}
