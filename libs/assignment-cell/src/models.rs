// libs/assignment-cell/src/models.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared_models::BookingRequestStatus;
use shared_utils::time::{deserialize_calendar_date, format_display_date, format_time, format_time_range};

// ==============================================================================
// BOOKING REQUESTS
// ==============================================================================

/// A patient's desired time before any doctor or slot has been assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub requested_date: NaiveDate,
    pub requested_time: String,
    pub status: BookingRequestStatus,
    #[serde(default)]
    pub patient_id: Option<String>,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl BookingRequest {
    pub fn date_label(&self) -> String {
        format_display_date(self.requested_date)
    }

    pub fn time_label(&self) -> String {
        format_time(&self.requested_time)
    }
}

/// What the admin is assigning a doctor to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentTarget {
    BookingRequest(String),
    Appointment(String),
}

impl AssignmentTarget {
    pub fn id(&self) -> &str {
        match self {
            AssignmentTarget::BookingRequest(id) | AssignmentTarget::Appointment(id) => id,
        }
    }

    fn base_path(&self) -> String {
        match self {
            AssignmentTarget::BookingRequest(id) => format!("/admin/booking-requests/{}", id),
            AssignmentTarget::Appointment(id) => format!("/admin/appointments/{}", id),
        }
    }

    pub fn available_doctors_path(&self) -> String {
        format!("{}/available-doctors", self.base_path())
    }

    pub fn assign_path(&self) -> String {
        format!("{}/assign", self.base_path())
    }
}

// ==============================================================================
// CANDIDATES
// ==============================================================================

/// One doctor/slot pair the server considers valid for the target's time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorSlotCandidate {
    pub doctor_id: String,
    #[serde(default)]
    pub doctor_name: Option<String>,
    pub slot_id: String,
    pub slot_start_time: String,
    pub slot_end_time: String,
}

impl DoctorSlotCandidate {
    pub fn doctor_label(&self) -> String {
        self.doctor_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.doctor_id.clone())
    }

    pub fn time_label(&self) -> String {
        format_time_range(&self.slot_start_time, &self.slot_end_time)
    }
}

/// Doctor choice shown in the picker, one entry per distinct doctor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorOption {
    pub doctor_id: String,
    pub label: String,
    pub slot_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequest {
    pub doctor_id: String,
    pub slot_id: String,
}
