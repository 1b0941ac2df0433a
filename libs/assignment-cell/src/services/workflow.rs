// libs/assignment-cell/src/services/workflow.rs
use std::sync::Arc;

use tracing::{debug, error, info};

use appointment_cell::models::Appointment;

use crate::error::AssignmentError;
use crate::models::{AssignRequest, AssignmentTarget, DoctorOption, DoctorSlotCandidate};
use crate::services::api::AssignmentApi;

pub const NO_DOCTORS_MESSAGE: &str = "No doctors available";

#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentPhase {
    Idle,
    Loading,
    Ready,
    /// Loaded with zero candidates. Displayed, not an error.
    NoCandidates,
    Submitting,
    Success,
    Error(String),
}

/// Assign-doctor modal. Doctor and slot are always chosen from the same
/// candidate entry so the pair can never drift apart.
pub struct AssignmentWorkflow {
    api: Arc<dyn AssignmentApi>,
    target: Option<AssignmentTarget>,
    candidates: Vec<DoctorSlotCandidate>,
    doctor_id: Option<String>,
    slot_id: Option<String>,
    phase: AssignmentPhase,
}

impl AssignmentWorkflow {
    pub fn new(api: Arc<dyn AssignmentApi>) -> Self {
        Self {
            api,
            target: None,
            candidates: Vec::new(),
            doctor_id: None,
            slot_id: None,
            phase: AssignmentPhase::Idle,
        }
    }

    /// Loads the candidates for `target` and preselects the first one.
    pub async fn open(&mut self, target: AssignmentTarget) -> Result<(), AssignmentError> {
        self.reset();
        self.target = Some(target.clone());
        self.phase = AssignmentPhase::Loading;

        let result = self.api.get_available_doctors(target.clone()).await;
        match result {
            Ok(candidates) => {
                debug!("{} candidates for {:?}", candidates.len(), target);
                self.candidates = candidates;

                match self.candidates.first() {
                    Some(first) => {
                        self.doctor_id = Some(first.doctor_id.clone());
                        self.slot_id = Some(first.slot_id.clone());
                        self.phase = AssignmentPhase::Ready;
                    }
                    None => self.phase = AssignmentPhase::NoCandidates,
                }
                Ok(())
            }
            Err(e) => {
                error!("Failed to load available doctors for {:?}: {}", target, e);
                self.phase = AssignmentPhase::Error(e.toast_message());
                Err(e.into())
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&AssignmentTarget> {
        self.target.as_ref()
    }

    pub fn phase(&self) -> &AssignmentPhase {
        &self.phase
    }

    pub fn candidates(&self) -> &[DoctorSlotCandidate] {
        &self.candidates
    }

    pub fn selected_doctor(&self) -> Option<&str> {
        self.doctor_id.as_deref()
    }

    pub fn selected_slot(&self) -> Option<&str> {
        self.slot_id.as_deref()
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        (self.phase == AssignmentPhase::NoCandidates).then_some(NO_DOCTORS_MESSAGE)
    }

    pub fn toast(&self) -> Option<&str> {
        match &self.phase {
            AssignmentPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Distinct doctors in candidate order.
    pub fn doctor_options(&self) -> Vec<DoctorOption> {
        let mut options: Vec<DoctorOption> = Vec::new();

        for candidate in &self.candidates {
            match options.iter_mut().find(|o| o.doctor_id == candidate.doctor_id) {
                Some(option) => option.slot_count += 1,
                None => options.push(DoctorOption {
                    doctor_id: candidate.doctor_id.clone(),
                    label: candidate.doctor_label(),
                    slot_count: 1,
                }),
            }
        }

        options
    }

    /// Slots offered for the currently selected doctor.
    pub fn slot_options(&self) -> Vec<&DoctorSlotCandidate> {
        match &self.doctor_id {
            Some(doctor_id) => self
                .candidates
                .iter()
                .filter(|c| &c.doctor_id == doctor_id)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Selects a doctor and snaps the slot to that doctor's first candidate.
    pub fn select_doctor(&mut self, doctor_id: &str) -> Result<(), AssignmentError> {
        let candidate = self
            .candidates
            .iter()
            .find(|c| c.doctor_id == doctor_id)
            .ok_or_else(|| AssignmentError::UnknownDoctor(doctor_id.to_string()))?;

        self.doctor_id = Some(candidate.doctor_id.clone());
        self.slot_id = Some(candidate.slot_id.clone());
        self.settle();
        Ok(())
    }

    /// Picks another slot of the selected doctor.
    pub fn select_slot(&mut self, slot_id: &str) -> Result<(), AssignmentError> {
        let doctor_id = self.doctor_id.as_deref().ok_or(AssignmentError::NoDoctorSelected)?;

        let belongs = self
            .candidates
            .iter()
            .any(|c| c.doctor_id == doctor_id && c.slot_id == slot_id);
        if !belongs {
            return Err(AssignmentError::SlotMismatch(slot_id.to_string()));
        }

        self.slot_id = Some(slot_id.to_string());
        self.settle();
        Ok(())
    }

    pub fn validate(&self) -> Result<AssignRequest, AssignmentError> {
        if self.target.is_none() {
            return Err(AssignmentError::NotOpen);
        }

        let doctor_id = self
            .doctor_id
            .clone()
            .filter(|d| !d.is_empty())
            .ok_or(AssignmentError::NoDoctorSelected)?;
        let slot_id = self
            .slot_id
            .clone()
            .filter(|s| !s.is_empty())
            .ok_or(AssignmentError::NoSlotSelected)?;

        Ok(AssignRequest { doctor_id, slot_id })
    }

    pub fn can_submit(&self) -> bool {
        self.validate().is_ok() && !matches!(self.phase, AssignmentPhase::Loading | AssignmentPhase::Submitting)
    }

    /// Sends exactly one assign request for a valid selection. A bare
    /// acknowledgement without a record still counts as success.
    pub async fn submit(&mut self) -> Result<Option<Appointment>, AssignmentError> {
        let request = self.validate()?;
        if self.phase == AssignmentPhase::Submitting {
            return Err(AssignmentError::RequestInFlight);
        }
        let target = self.target.clone().ok_or(AssignmentError::NotOpen)?;

        self.phase = AssignmentPhase::Submitting;

        let result = self.api.assign(target.clone(), request).await;
        match result {
            Ok(appointment) => {
                info!("Assigned {:?}", target);
                self.reset();
                self.phase = AssignmentPhase::Success;
                Ok(appointment)
            }
            Err(e) => {
                error!("Assignment of {:?} failed: {}", target, e);
                self.phase = AssignmentPhase::Error(e.toast_message());
                Err(e.into())
            }
        }
    }

    pub fn close(&mut self) {
        self.reset();
    }

    fn settle(&mut self) {
        if matches!(self.phase, AssignmentPhase::Error(_)) {
            self.phase = AssignmentPhase::Ready;
        }
    }

    fn reset(&mut self) {
        self.target = None;
        self.candidates.clear();
        self.doctor_id = None;
        self.slot_id = None;
        self.phase = AssignmentPhase::Idle;
    }
}
