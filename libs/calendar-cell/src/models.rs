use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::AppError;

/// Connection state of the doctor's Google Calendar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarStatus {
    #[serde(default)]
    pub connected: bool,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub calendar_id: Option<String>,
    #[serde(default)]
    pub last_sync_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUrlResponse {
    pub auth_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportEventsRequest {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportEventsResult {
    #[serde(default)]
    pub imported: u32,
    #[serde(default)]
    pub skipped: u32,
}

impl ImportEventsResult {
    pub fn summary(&self) -> String {
        format!("Imported {} events, skipped {}", self.imported, self.skipped)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalendarError {
    #[error("Google Calendar is not connected")]
    NotConnected,

    #[error("End date {end} is before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error(transparent)]
    Api(#[from] AppError),
}

impl CalendarError {
    pub fn toast_message(&self) -> String {
        match self {
            CalendarError::Api(err) => err.toast_message(),
            other => other.to_string(),
        }
    }
}
