use tracing::{debug, info, warn};

use crate::models::{Appointment, AppointmentError, CancelAppointmentRequest};
use crate::services::lifecycle::AppointmentLifecycleService;
use crate::services::store::AppointmentStore;

/// Policy copy shown before submission. Fees are computed by the server only.
pub const CANCELLATION_FEE_NOTICE: &str =
    "Cancellation fee policy: $25 within 24 hours of the appointment, $50 for no-show.";

#[derive(Debug, Clone, PartialEq)]
pub enum CancelPhase {
    Idle,
    Editing,
    Submitting,
    Success,
    Error(String),
}

/// Cancel modal: reason + confirmation checkbox → one request.
pub struct CancelWorkflow {
    lifecycle: AppointmentLifecycleService,
    appointment_id: Option<String>,
    reason: String,
    confirmed: bool,
    validation_error: Option<String>,
    phase: CancelPhase,
}

impl CancelWorkflow {
    pub fn new() -> Self {
        Self {
            lifecycle: AppointmentLifecycleService::new(),
            appointment_id: None,
            reason: String::new(),
            confirmed: false,
            validation_error: None,
            phase: CancelPhase::Idle,
        }
    }

    pub fn open(&mut self, appointment: &Appointment) -> Result<(), AppointmentError> {
        self.lifecycle.ensure_cancellable(appointment)?;

        self.reset();
        self.appointment_id = Some(appointment.id.clone());
        self.phase = CancelPhase::Editing;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.appointment_id.is_some()
    }

    pub fn phase(&self) -> &CancelPhase {
        &self.phase
    }

    pub fn fee_notice(&self) -> &'static str {
        CANCELLATION_FEE_NOTICE
    }

    pub fn set_reason(&mut self, reason: &str) {
        self.reason = reason.to_string();
        self.validation_error = None;
    }

    pub fn set_confirmed(&mut self, confirmed: bool) {
        self.confirmed = confirmed;
        self.validation_error = None;
    }

    /// Inline message from the last rejected submission.
    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    pub fn toast(&self) -> Option<&str> {
        match &self.phase {
            CancelPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Client-only gate: non-blank reason and a ticked checkbox.
    pub fn validate(&self) -> Result<CancelAppointmentRequest, AppointmentError> {
        let appointment_id = self.appointment_id.clone().ok_or(AppointmentError::NotOpen)?;

        let reason = self.reason.trim();
        if reason.is_empty() {
            return Err(AppointmentError::EmptyCancellationReason);
        }
        if !self.confirmed {
            return Err(AppointmentError::CancellationNotConfirmed);
        }

        Ok(CancelAppointmentRequest {
            appointment_id,
            cancellation_reason: reason.to_string(),
        })
    }

    /// Whether the submit control is enabled. Validation runs on submit so
    /// the user gets a message rather than a dead button.
    pub fn can_submit(&self, store: &AppointmentStore) -> bool {
        self.is_open() && self.phase != CancelPhase::Submitting && !store.cancel_state().loading
    }

    pub async fn submit(&mut self, store: &mut AppointmentStore) -> Result<(), AppointmentError> {
        let request = match self.validate() {
            Ok(request) => request,
            Err(e) => {
                debug!("Cancel rejected locally: {}", e);
                self.validation_error = Some(e.toast_message());
                return Err(e);
            }
        };

        if self.phase == CancelPhase::Submitting || store.cancel_state().loading {
            return Err(AppointmentError::RequestInFlight("cancel"));
        }

        self.phase = CancelPhase::Submitting;
        let appointment_id = request.appointment_id.clone();

        match store.cancel(request).await {
            Ok(_) => {
                if let Err(e) = store.refetch().await {
                    warn!("Refetch after cancel failed: {}", e);
                }
                store.clear_cancel_flags();
                self.reset();
                self.phase = CancelPhase::Success;
                info!("Cancellation of {} completed", appointment_id);
                Ok(())
            }
            Err(e) => {
                store.clear_cancel_flags();
                self.phase = CancelPhase::Error(e.toast_message());
                Err(e)
            }
        }
    }

    pub fn close(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.appointment_id = None;
        self.reason.clear();
        self.confirmed = false;
        self.validation_error = None;
        self.phase = CancelPhase::Idle;
    }
}

impl Default for CancelWorkflow {
    fn default() -> Self {
        Self::new()
    }
}
