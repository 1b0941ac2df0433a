use chrono::{Duration, NaiveDate};
use serde::Serialize;

use shared_utils::time::format_date_local;

pub const DEFAULT_DAYS_AHEAD: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayTab {
    pub date: NaiveDate,
    /// Cache key, `YYYY-MM-DD`.
    pub key: String,
    /// Short weekday, e.g. `Mon`.
    pub weekday: String,
    /// Short month and day, e.g. `Jun 10`.
    pub label: String,
    pub is_today: bool,
}

impl DayTab {
    pub fn for_date(date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            date,
            key: format_date_local(date),
            weekday: date.format("%a").to_string(),
            label: date.format("%b %-d").to_string(),
            is_today: date == today,
        }
    }
}

/// Today first, then `days_ahead` consecutive calendar days.
pub fn generate_day_tabs(today: NaiveDate, days_ahead: u32) -> Vec<DayTab> {
    (0..=i64::from(days_ahead))
        .map(|offset| DayTab::for_date(today + Duration::days(offset), today))
        .collect()
}
