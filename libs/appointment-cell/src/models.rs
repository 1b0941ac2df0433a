// libs/appointment-cell/src/models.rs
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared_models::AppError;
use shared_utils::time::{deserialize_calendar_date, format_date_local, format_display_date, format_time};

pub use shared_models::AppointmentStatus;

/// Service category name → ordered medication names.
pub type Medications = BTreeMap<String, Vec<String>>;

// ==============================================================================
// CORE APPOINTMENT MODEL
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(alias = "_id")]
    pub id: String,
    /// Calendar date only; the server may send a timestamp, its date part is kept as is.
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub appointment_date: NaiveDate,
    pub appointment_time: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub doctor_id: Option<String>,
    #[serde(default)]
    pub patient_id: Option<String>,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub slot_id: Option<String>,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub patient_notes: Option<String>,
    #[serde(default)]
    pub internal_notes: Option<String>,
    #[serde(default)]
    pub medications: Medications,
    #[serde(default)]
    pub report_pdf_path: Option<String>,
    #[serde(default)]
    pub google_meet_link: Option<String>,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub doctor_name: Option<String>,
    #[serde(default)]
    pub service_name: Option<String>,
}

impl Appointment {
    /// Both a doctor and a slot are set.
    pub fn is_assigned(&self) -> bool {
        self.doctor_id.as_deref().is_some_and(|d| !d.is_empty())
            && self.slot_id.as_deref().is_some_and(|s| !s.is_empty())
    }

    pub fn date_key(&self) -> String {
        format_date_local(self.appointment_date)
    }

    pub fn date_label(&self) -> String {
        format_display_date(self.appointment_date)
    }

    pub fn time_label(&self) -> String {
        format_time(&self.appointment_time)
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleAppointmentRequest {
    pub appointment_id: String,
    pub new_slot_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelAppointmentRequest {
    pub appointment_id: String,
    pub cancellation_reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateMedicationsRequest {
    pub medications: Medications,
    pub merge: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInternalNotesRequest {
    pub internal_notes: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientAppointmentsQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub limit: Option<u32>,
}

impl PatientAppointmentsQuery {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = self.start_date {
            pairs.push(("startDate", format_date_local(start)));
        }
        if let Some(end) = self.end_date {
            pairs.push(("endDate", format_date_local(end)));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctorScheduleQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<AppointmentStatus>,
    pub appointment_type: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl DoctorScheduleQuery {
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
            ..Self::default()
        }
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = self.start_date {
            pairs.push(("startDate", format_date_local(start)));
        }
        if let Some(end) = self.end_date {
            pairs.push(("endDate", format_date_local(end)));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(appointment_type) = &self.appointment_type {
            pairs.push(("appointmentType", appointment_type.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppointmentError {
    #[error("Please provide a reason for cancelling")]
    EmptyCancellationReason,

    #[error("Please confirm that you understand the cancellation policy")]
    CancellationNotConfirmed,

    #[error("Please select a date")]
    NoDateSelected,

    #[error("Please select a time slot")]
    NoSlotSelected,

    #[error("The selected time slot is not available")]
    SlotNotOffered,

    #[error("This appointment has no doctor assigned yet")]
    NoDoctorAssigned,

    #[error("Appointment cannot be changed in its current status: {0}")]
    InvalidStatus(AppointmentStatus),

    #[error("No appointment is open")]
    NotOpen,

    #[error("A {0} request is already in progress")]
    RequestInFlight(&'static str),

    #[error(transparent)]
    Api(#[from] AppError),
}

impl AppointmentError {
    /// Local validation failures never reached the network.
    pub fn is_local(&self) -> bool {
        !matches!(self, AppointmentError::Api(_))
    }

    pub fn toast_message(&self) -> String {
        match self {
            AppointmentError::Api(err) => err.toast_message(),
            other => other.to_string(),
        }
    }
}
