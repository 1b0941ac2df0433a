// libs/doctor-cell/src/services/slot_display.rs
use serde::Serialize;

use shared_models::{AppointmentStatus, Tone};
use shared_utils::time::{format_time, format_time_range};

use crate::models::{Slot, SlotStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotIcon {
    Checkmark,
    Person,
    Cross,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotDisplay {
    pub tone: Tone,
    pub icon: SlotIcon,
    pub label: &'static str,
}

impl SlotStatus {
    /// Display is a pure function of the status field.
    pub fn display(&self) -> SlotDisplay {
        match self {
            SlotStatus::Available => SlotDisplay { tone: Tone::Success, icon: SlotIcon::Checkmark, label: "Available" },
            SlotStatus::Booked => SlotDisplay { tone: Tone::Info, icon: SlotIcon::Person, label: "Booked" },
            SlotStatus::Blocked => SlotDisplay { tone: Tone::Neutral, icon: SlotIcon::Cross, label: "Blocked" },
            SlotStatus::Unknown => SlotDisplay { tone: Tone::Neutral, icon: SlotIcon::Warning, label: "Unknown" },
        }
    }
}

/// A cell in the per-day slot grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotCard {
    pub slot_id: String,
    pub time_label: String,
    pub display: SlotDisplay,
    pub patient_name: Option<String>,
}

impl From<&Slot> for SlotCard {
    fn from(slot: &Slot) -> Self {
        let patient_name = match slot.status {
            SlotStatus::Booked => slot.appointment.as_ref().map(|a| a.patient_name.clone()),
            _ => None,
        };

        Self {
            slot_id: slot.id.clone(),
            time_label: format_time(&slot.start_time),
            display: slot.status.display(),
            patient_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingDetail {
    pub patient_name: String,
    pub patient_email: Option<String>,
    pub patient_phone: Option<String>,
    pub service_name: Option<String>,
    pub status: Option<AppointmentStatus>,
    pub status_label: Option<&'static str>,
    pub status_tone: Option<Tone>,
    pub notes: Option<String>,
    pub join_link: Option<String>,
}

/// Read-only detail view opened by clicking a slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotDetail {
    pub slot_id: String,
    pub time_range: String,
    pub display: SlotDisplay,
    pub booking: Option<BookingDetail>,
}

impl SlotDetail {
    pub fn join_link(&self) -> Option<&str> {
        self.booking.as_ref().and_then(|b| b.join_link.as_deref())
    }
}

impl From<&Slot> for SlotDetail {
    fn from(slot: &Slot) -> Self {
        // Only a booked slot exposes its appointment, whatever else the payload carries.
        let booking = match (slot.status, slot.appointment.as_ref()) {
            (SlotStatus::Booked, Some(appointment)) => Some(BookingDetail {
                patient_name: appointment.patient_name.clone(),
                patient_email: appointment.patient_email.clone(),
                patient_phone: appointment.patient_phone.clone().filter(|p| !p.trim().is_empty()),
                service_name: appointment.service_name.clone(),
                status: appointment.status,
                status_label: appointment.status.map(|s| s.label()),
                status_tone: appointment.status.map(|s| s.tone()),
                notes: appointment.patient_notes.clone().filter(|n| !n.trim().is_empty()),
                join_link: appointment.google_meet_link.clone().filter(|l| !l.trim().is_empty()),
            }),
            _ => None,
        };

        Self {
            slot_id: slot.id.clone(),
            time_range: format_time_range(&slot.start_time, &slot.end_time),
            display: slot.status.display(),
            booking,
        }
    }
}
