use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared_models::{AppError, AppointmentStatus};
use shared_utils::time::deserialize_calendar_date;

// ==============================================================================
// SLOT MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    #[serde(alias = "_id")]
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    pub status: SlotStatus,
    #[serde(default)]
    pub appointment: Option<BookedAppointment>,
}

impl Slot {
    pub fn is_available(&self) -> bool {
        self.status == SlotStatus::Available
    }
}

/// Authoritative server status of a slot. The client never flips it locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Booked,
    Blocked,
    #[serde(other)]
    Unknown,
}

/// Appointment summary embedded in a booked slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedAppointment {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub patient_name: String,
    #[serde(default)]
    pub patient_email: Option<String>,
    #[serde(default)]
    pub patient_phone: Option<String>,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub status: Option<AppointmentStatus>,
    #[serde(default)]
    pub patient_notes: Option<String>,
    #[serde(default)]
    pub google_meet_link: Option<String>,
}

/// One day of slots as returned by the slots endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySlots {
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub slots: Vec<Slot>,
}

// ==============================================================================
// WORKING HOURS MODELS
// ==============================================================================

/// Recurring weekly template the server turns into slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHours {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub day_of_week: u8, // 0 = Sunday, 1 = Monday, etc.
    pub start_time: String,
    pub end_time: String,
    pub slot_duration: u32,
    #[serde(default)]
    pub break_duration: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl WorkingHours {
    pub fn day_name(&self) -> &'static str {
        match self.day_of_week {
            0 => "Sunday",
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            6 => "Saturday",
            _ => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveWorkingHoursRequest {
    pub doctor_id: String,
    pub working_hours: Vec<WorkingHours>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSchedulesRequest {
    pub doctor_id: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSchedulesResult {
    #[serde(default)]
    pub slots_created: u32,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DoctorError {
    #[error("Invalid working hours: {0}")]
    InvalidWorkingHours(String),

    #[error("Date {0} is outside the bookable range")]
    DateOutOfRange(NaiveDate),

    #[error("No doctor is signed in")]
    NotSignedIn,

    #[error(transparent)]
    Api(#[from] AppError),
}

impl DoctorError {
    pub fn toast_message(&self) -> String {
        match self {
            DoctorError::Api(err) => err.toast_message(),
            other => other.to_string(),
        }
    }
}
