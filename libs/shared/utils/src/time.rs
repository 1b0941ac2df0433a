// libs/shared/utils/src/time.rs
use chrono::{Datelike, Local, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer};

/// Today's calendar date in the host's local timezone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// `YYYY-MM-DD` built from the year, month and day components.
pub fn format_date_local(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

pub fn parse_date_local(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Calendar date carried by a server value: either `YYYY-MM-DD` or an ISO
/// timestamp whose first ten characters are the stored date.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let prefix = value.get(..10)?;
    parse_date_local(prefix)
}

/// `"Mon, Jun 10, 2024"`
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// `"14:30"` → `"2:30 PM"`. Anything that is not `HH:MM` comes back unchanged.
pub fn format_time(value: &str) -> String {
    match parse_time(value) {
        Some(time) => {
            let (is_pm, hour) = time.hour12();
            format!("{}:{:02} {}", hour, time.minute(), if is_pm { "PM" } else { "AM" })
        }
        None => value.to_string(),
    }
}

pub fn format_time_range(start: &str, end: &str) -> String {
    format!("{} - {}", format_time(start), format_time(end))
}

/// Accepts `HH:MM` and `HH:MM:SS`.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

pub fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid calendar date: {}", raw)))
}
