// libs/appointment-cell/src/services/reschedule.rs
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, error, info, warn};

use doctor_cell::models::Slot;
use shared_utils::time::format_date_local;

use crate::models::{Appointment, AppointmentError, RescheduleAppointmentRequest};
use crate::services::api::AppointmentApi;
use crate::services::lifecycle::AppointmentLifecycleService;
use crate::services::store::AppointmentStore;

#[derive(Debug, Clone, PartialEq)]
pub enum ReschedulePhase {
    Idle,
    DateSelected,
    SlotsLoading,
    SlotsLoaded,
    /// Loaded with zero slots: "No available slots for this date".
    Empty,
    SlotSelected,
    Submitting,
    Success,
    Error(String),
}

pub const NO_SLOTS_MESSAGE: &str = "No available slots for this date";

/// Reschedule modal: date → available slots → slot → confirm.
pub struct RescheduleWorkflow {
    api: Arc<dyn AppointmentApi>,
    lifecycle: AppointmentLifecycleService,
    appointment: Option<Appointment>,
    date: Option<NaiveDate>,
    slots: Vec<Slot>,
    selected_slot: Option<String>,
    reason: String,
    phase: ReschedulePhase,
}

impl RescheduleWorkflow {
    pub fn new(api: Arc<dyn AppointmentApi>) -> Self {
        Self {
            api,
            lifecycle: AppointmentLifecycleService::new(),
            appointment: None,
            date: None,
            slots: Vec::new(),
            selected_slot: None,
            reason: String::new(),
            phase: ReschedulePhase::Idle,
        }
    }

    pub fn open(&mut self, appointment: &Appointment) -> Result<(), AppointmentError> {
        self.lifecycle.ensure_reschedulable(appointment)?;

        self.reset();
        self.appointment = Some(appointment.clone());
        debug!("Reschedule opened for appointment {}", appointment.id);
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.appointment.is_some()
    }

    pub fn phase(&self) -> &ReschedulePhase {
        &self.phase
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn selected_slot(&self) -> Option<&str> {
        self.selected_slot.as_deref()
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        (self.phase == ReschedulePhase::Empty).then_some(NO_SLOTS_MESSAGE)
    }

    pub fn toast(&self) -> Option<&str> {
        match &self.phase {
            ReschedulePhase::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == ReschedulePhase::Submitting
    }

    pub fn set_reason(&mut self, reason: &str) {
        self.reason = reason.to_string();
    }

    /// Picks a date and fetches its available slots once. Any earlier slot
    /// selection is dropped so it cannot be submitted against the new date.
    pub async fn select_date(&mut self, date: NaiveDate) -> Result<(), AppointmentError> {
        let appointment = self.appointment.as_ref().ok_or(AppointmentError::NotOpen)?;
        let doctor_id = appointment
            .doctor_id
            .clone()
            .ok_or(AppointmentError::NoDoctorAssigned)?;
        let service_id = appointment.service_id.clone();

        self.date = Some(date);
        self.selected_slot = None;
        self.slots.clear();
        self.phase = ReschedulePhase::DateSelected;

        debug!("Loading available slots for doctor {} on {}", doctor_id, format_date_local(date));
        self.phase = ReschedulePhase::SlotsLoading;

        let result = self.api.get_available_slots(doctor_id, date, service_id).await;
        match result {
            Ok(slots) => {
                self.phase = if slots.is_empty() {
                    ReschedulePhase::Empty
                } else {
                    ReschedulePhase::SlotsLoaded
                };
                self.slots = slots;
                Ok(())
            }
            Err(e) => {
                error!("Failed to load available slots: {}", e);
                self.phase = ReschedulePhase::Error(e.toast_message());
                Err(e.into())
            }
        }
    }

    pub fn select_slot(&mut self, slot_id: &str) -> Result<(), AppointmentError> {
        if self.date.is_none() {
            return Err(AppointmentError::NoDateSelected);
        }

        let offered = self
            .slots
            .iter()
            .any(|slot| slot.id == slot_id && slot.is_available());
        if !offered {
            return Err(AppointmentError::SlotNotOffered);
        }

        self.selected_slot = Some(slot_id.to_string());
        self.phase = ReschedulePhase::SlotSelected;
        Ok(())
    }

    /// Whether the confirm control is enabled.
    pub fn can_confirm(&self, store: &AppointmentStore) -> bool {
        self.is_open()
            && self.selected_slot.is_some()
            && !matches!(self.phase, ReschedulePhase::SlotsLoading | ReschedulePhase::Submitting)
            && !store.reschedule_state().loading
    }

    /// Sends the single reschedule request. On success the list is refetched
    /// before the flags are cleared, then the modal closes. On failure the
    /// flags are cleared and the selection kept for a clean retry.
    pub async fn confirm(&mut self, store: &mut AppointmentStore) -> Result<(), AppointmentError> {
        let appointment_id = self
            .appointment
            .as_ref()
            .map(|a| a.id.clone())
            .ok_or(AppointmentError::NotOpen)?;
        let new_slot_id = self.selected_slot.clone().ok_or(AppointmentError::NoSlotSelected)?;

        if self.is_submitting() || store.reschedule_state().loading {
            return Err(AppointmentError::RequestInFlight("reschedule"));
        }

        let reason = Some(self.reason.trim().to_string()).filter(|r| !r.is_empty());
        let request = RescheduleAppointmentRequest {
            appointment_id,
            new_slot_id,
            reason,
        };

        self.phase = ReschedulePhase::Submitting;

        match store.reschedule(request).await {
            Ok(_) => {
                if let Err(e) = store.refetch().await {
                    warn!("Refetch after reschedule failed: {}", e);
                }
                store.clear_reschedule_flags();
                self.reset();
                self.phase = ReschedulePhase::Success;
                info!("Reschedule completed");
                Ok(())
            }
            Err(e) => {
                store.clear_reschedule_flags();
                self.phase = ReschedulePhase::Error(e.toast_message());
                Err(e)
            }
        }
    }

    /// Closing at any point forgets the date and slot selection.
    pub fn close(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.appointment = None;
        self.date = None;
        self.slots.clear();
        self.selected_slot = None;
        self.reason.clear();
        self.phase = ReschedulePhase::Idle;
    }
}
