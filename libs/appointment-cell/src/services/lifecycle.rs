// libs/appointment-cell/src/services/lifecycle.rs
use serde::Serialize;
use tracing::debug;

use crate::models::{Appointment, AppointmentError, AppointmentStatus};

/// Who is looking at an appointment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    Patient,
    Doctor,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowAction {
    Details,
    Reschedule,
    Cancel,
    AssignDoctor,
}

/// Client view of the appointment lifecycle.
///
/// Transitions are decided by the server. The client only uses this to know
/// which requests it may offer and what to expect back.
pub struct AppointmentLifecycleService;

impl AppointmentLifecycleService {
    pub fn new() -> Self {
        Self
    }

    /// Statuses the server may move an appointment to next.
    pub fn get_expected_transitions(&self, current_status: &AppointmentStatus) -> Vec<AppointmentStatus> {
        match current_status {
            AppointmentStatus::Pending => vec![
                AppointmentStatus::Confirmed,
                AppointmentStatus::Cancelled,
                AppointmentStatus::NoShow,
            ],
            AppointmentStatus::Confirmed => vec![
                AppointmentStatus::InProgress,
                AppointmentStatus::Completed,
                AppointmentStatus::Cancelled,
                AppointmentStatus::NoShow,
                AppointmentStatus::Rescheduled,
            ],
            AppointmentStatus::InProgress => vec![AppointmentStatus::Completed],
            // Rescheduled is superseded by a new appointment record
            AppointmentStatus::Rescheduled
            | AppointmentStatus::Completed
            | AppointmentStatus::Cancelled
            | AppointmentStatus::NoShow => vec![],
        }
    }

    pub fn is_terminal(&self, status: &AppointmentStatus) -> bool {
        self.get_expected_transitions(status).is_empty()
    }

    pub fn can_reschedule(&self, status: &AppointmentStatus) -> bool {
        matches!(status, AppointmentStatus::Pending | AppointmentStatus::Confirmed)
    }

    pub fn can_cancel(&self, status: &AppointmentStatus) -> bool {
        matches!(status, AppointmentStatus::Pending | AppointmentStatus::Confirmed)
    }

    pub fn ensure_reschedulable(&self, appointment: &Appointment) -> Result<(), AppointmentError> {
        if !self.can_reschedule(&appointment.status) {
            debug!("Reschedule not offered for {} in status {}", appointment.id, appointment.status);
            return Err(AppointmentError::InvalidStatus(appointment.status));
        }
        if appointment.doctor_id.as_deref().map_or(true, str::is_empty) {
            return Err(AppointmentError::NoDoctorAssigned);
        }
        Ok(())
    }

    pub fn ensure_cancellable(&self, appointment: &Appointment) -> Result<(), AppointmentError> {
        if !self.can_cancel(&appointment.status) {
            debug!("Cancel not offered for {} in status {}", appointment.id, appointment.status);
            return Err(AppointmentError::InvalidStatus(appointment.status));
        }
        Ok(())
    }

    /// Per-row actions for a list view.
    pub fn row_actions(&self, appointment: &Appointment, audience: Audience) -> Vec<RowAction> {
        let mut actions = vec![RowAction::Details];

        if audience == Audience::Admin
            && appointment.status == AppointmentStatus::Pending
            && !appointment.is_assigned()
        {
            actions.push(RowAction::AssignDoctor);
        }

        if self.ensure_reschedulable(appointment).is_ok() {
            actions.push(RowAction::Reschedule);
        }

        if self.can_cancel(&appointment.status) {
            actions.push(RowAction::Cancel);
        }

        actions
    }
}

impl Default for AppointmentLifecycleService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn appointment(status: AppointmentStatus, doctor: Option<&str>, slot: Option<&str>) -> Appointment {
        Appointment {
            id: "a-1".to_string(),
            appointment_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            appointment_time: "09:00".to_string(),
            status,
            doctor_id: doctor.map(String::from),
            patient_id: Some("p-1".to_string()),
            service_id: None,
            slot_id: slot.map(String::from),
            duration: 30,
            patient_notes: None,
            internal_notes: None,
            medications: Default::default(),
            report_pdf_path: None,
            google_meet_link: None,
            patient_name: None,
            doctor_name: None,
            service_name: None,
        }
    }

    #[test]
    fn test_terminal_statuses() {
        let lifecycle = AppointmentLifecycleService::new();
        assert!(lifecycle.is_terminal(&AppointmentStatus::Completed));
        assert!(lifecycle.is_terminal(&AppointmentStatus::Cancelled));
        assert!(lifecycle.is_terminal(&AppointmentStatus::NoShow));
        assert!(lifecycle.is_terminal(&AppointmentStatus::Rescheduled));
        assert!(!lifecycle.is_terminal(&AppointmentStatus::Pending));
        assert!(lifecycle
            .get_expected_transitions(&AppointmentStatus::Pending)
            .contains(&AppointmentStatus::Confirmed));
    }

    #[test]
    fn test_row_actions_by_status() {
        let lifecycle = AppointmentLifecycleService::new();

        let confirmed = appointment(AppointmentStatus::Confirmed, Some("d-1"), Some("s-1"));
        assert_eq!(
            lifecycle.row_actions(&confirmed, Audience::Patient),
            vec![RowAction::Details, RowAction::Reschedule, RowAction::Cancel]
        );

        let completed = appointment(AppointmentStatus::Completed, Some("d-1"), Some("s-1"));
        assert_eq!(lifecycle.row_actions(&completed, Audience::Doctor), vec![RowAction::Details]);
    }

    #[test]
    fn test_unassigned_pending_offers_assignment_to_admin_only() {
        let lifecycle = AppointmentLifecycleService::new();
        let pending = appointment(AppointmentStatus::Pending, None, None);

        assert_eq!(
            lifecycle.row_actions(&pending, Audience::Admin),
            vec![RowAction::Details, RowAction::AssignDoctor, RowAction::Cancel]
        );
        assert_eq!(
            lifecycle.row_actions(&pending, Audience::Patient),
            vec![RowAction::Details, RowAction::Cancel]
        );
        assert_eq!(
            lifecycle.ensure_reschedulable(&pending),
            Err(AppointmentError::NoDoctorAssigned)
        );
    }

    #[test]
    fn test_assignment_requires_pending_and_missing_pair() {
        let lifecycle = AppointmentLifecycleService::new();

        let slotless = appointment(AppointmentStatus::Pending, Some("d-1"), None);
        assert!(lifecycle
            .row_actions(&slotless, Audience::Admin)
            .contains(&RowAction::AssignDoctor));

        let assigned = appointment(AppointmentStatus::Pending, Some("d-1"), Some("s-1"));
        assert!(!lifecycle
            .row_actions(&assigned, Audience::Admin)
            .contains(&RowAction::AssignDoctor));

        let cancelled = appointment(AppointmentStatus::Cancelled, None, None);
        assert_eq!(lifecycle.row_actions(&cancelled, Audience::Admin), vec![RowAction::Details]);
    }
}
