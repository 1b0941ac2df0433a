use std::sync::Arc;

use assert_matches::assert_matches;
use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::{mock, predicate::eq};

use appointment_cell::models::{Appointment, AppointmentStatus};
use assignment_cell::models::{AssignRequest, AssignmentTarget, BookingRequest, DoctorSlotCandidate};
use assignment_cell::services::{AssignmentApi, AssignmentPhase, AssignmentWorkflow};
use assignment_cell::AssignmentError;
use shared_models::{AppError, BookingRequestStatus};

mock! {
    pub Api {}

    #[async_trait]
    impl AssignmentApi for Api {
        async fn get_booking_requests(
            &self,
            status: Option<BookingRequestStatus>,
        ) -> Result<Vec<BookingRequest>, AppError>;

        async fn get_unassigned_appointments(&self) -> Result<Vec<Appointment>, AppError>;

        async fn get_available_doctors(&self, target: AssignmentTarget) -> Result<Vec<DoctorSlotCandidate>, AppError>;

        async fn assign(&self, target: AssignmentTarget, request: AssignRequest) -> Result<Option<Appointment>, AppError>;
    }
}

fn candidate(doctor_id: &str, slot_id: &str, start: &str) -> DoctorSlotCandidate {
    DoctorSlotCandidate {
        doctor_id: doctor_id.to_string(),
        doctor_name: Some(format!("Dr. {}", doctor_id)),
        slot_id: slot_id.to_string(),
        slot_start_time: start.to_string(),
        slot_end_time: "17:00".to_string(),
    }
}

fn candidates() -> Vec<DoctorSlotCandidate> {
    vec![
        candidate("doc-a", "slot-a1", "09:00"),
        candidate("doc-b", "slot-b1", "10:00"),
        candidate("doc-a", "slot-a2", "11:00"),
        candidate("doc-b", "slot-b2", "12:00"),
    ]
}

fn confirmed(id: &str, doctor_id: &str, slot_id: &str) -> Appointment {
    Appointment {
        id: id.to_string(),
        appointment_date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
        appointment_time: "10:00".to_string(),
        status: AppointmentStatus::Confirmed,
        doctor_id: Some(doctor_id.to_string()),
        patient_id: Some("patient-1".to_string()),
        service_id: Some("service-1".to_string()),
        slot_id: Some(slot_id.to_string()),
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

#[tokio::test]
async fn test_open_defaults_to_first_candidate() {
    let mut api = MockApi::new();
    api.expect_get_available_doctors()
        .with(eq(AssignmentTarget::BookingRequest("br-1".to_string())))
        .times(1)
        .returning(|_| Ok(candidates()));

    let mut workflow = AssignmentWorkflow::new(Arc::new(api));
    workflow
        .open(AssignmentTarget::BookingRequest("br-1".to_string()))
        .await
        .unwrap();

    assert_eq!(workflow.phase(), &AssignmentPhase::Ready);
    assert_eq!(workflow.selected_doctor(), Some("doc-a"));
    assert_eq!(workflow.selected_slot(), Some("slot-a1"));
    assert!(workflow.can_submit());

    let options = workflow.doctor_options();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].label, "Dr. doc-a");
    assert_eq!(options[0].slot_count, 2);
}

#[tokio::test]
async fn test_selecting_doctor_snaps_slot_to_that_doctor() {
    let mut api = MockApi::new();
    api.expect_get_available_doctors().times(1).returning(|_| Ok(candidates()));

    let mut workflow = AssignmentWorkflow::new(Arc::new(api));
    workflow
        .open(AssignmentTarget::Appointment("a-1".to_string()))
        .await
        .unwrap();

    workflow.select_slot("slot-a2").unwrap();
    workflow.select_doctor("doc-b").unwrap();
    assert_eq!(workflow.selected_doctor(), Some("doc-b"));
    assert_eq!(workflow.selected_slot(), Some("slot-b1"));

    // Every reachable pair exists in the candidate list.
    for doctor in ["doc-a", "doc-b", "doc-a"] {
        workflow.select_doctor(doctor).unwrap();
        let doctor_id = workflow.selected_doctor().unwrap();
        let slot_id = workflow.selected_slot().unwrap();
        assert!(workflow
            .candidates()
            .iter()
            .any(|c| c.doctor_id == doctor_id && c.slot_id == slot_id));
    }

    assert_matches!(workflow.select_slot("slot-b2"), Err(AssignmentError::SlotMismatch(_)));
    assert_matches!(workflow.select_doctor("doc-z"), Err(AssignmentError::UnknownDoctor(_)));
    assert_eq!(workflow.selected_doctor(), Some("doc-a"));

    let slots: Vec<String> = workflow.slot_options().iter().map(|c| c.slot_id.clone()).collect();
    assert_eq!(slots, vec!["slot-a1", "slot-a2"]);
}

#[tokio::test]
async fn test_no_candidates_is_displayed_state() {
    let mut api = MockApi::new();
    api.expect_get_available_doctors().times(1).returning(|_| Ok(vec![]));
    api.expect_assign().never();

    let mut workflow = AssignmentWorkflow::new(Arc::new(api));
    workflow
        .open(AssignmentTarget::BookingRequest("br-1".to_string()))
        .await
        .unwrap();

    assert_eq!(workflow.phase(), &AssignmentPhase::NoCandidates);
    assert_eq!(workflow.empty_message(), Some("No doctors available"));
    assert!(workflow.toast().is_none());
    assert!(!workflow.can_submit());
    assert_matches!(workflow.submit().await, Err(AssignmentError::NoDoctorSelected));
}

#[tokio::test]
async fn test_submit_sends_exactly_one_request() {
    let target = AssignmentTarget::Appointment("a-1".to_string());

    let mut api = MockApi::new();
    api.expect_get_available_doctors().times(1).returning(|_| Ok(candidates()));
    api.expect_assign()
        .with(
            eq(target.clone()),
            eq(AssignRequest {
                doctor_id: "doc-b".to_string(),
                slot_id: "slot-b2".to_string(),
            }),
        )
        .times(1)
        .returning(|_, request| Ok(Some(confirmed("a-1", &request.doctor_id, &request.slot_id))));

    let mut workflow = AssignmentWorkflow::new(Arc::new(api));
    workflow.open(target).await.unwrap();
    workflow.select_doctor("doc-b").unwrap();
    workflow.select_slot("slot-b2").unwrap();

    let appointment = workflow.submit().await.unwrap().unwrap();

    assert!(appointment.is_assigned());
    assert_eq!(workflow.phase(), &AssignmentPhase::Success);
    assert!(!workflow.is_open());
}

#[tokio::test]
async fn test_failed_assignment_keeps_selection() {
    let mut api = MockApi::new();
    api.expect_get_available_doctors().times(1).returning(|_| Ok(candidates()));
    api.expect_assign()
        .times(1)
        .returning(|_, _| Err(AppError::request_failed(Some(409), Some("Slot already booked".to_string()))));

    let mut workflow = AssignmentWorkflow::new(Arc::new(api));
    workflow
        .open(AssignmentTarget::BookingRequest("br-7".to_string()))
        .await
        .unwrap();

    let result = workflow.submit().await;
    assert_matches!(result, Err(AssignmentError::Api(AppError::RequestFailed { status: Some(409), .. })));
    assert_eq!(workflow.toast(), Some("Slot already booked"));
    assert_eq!(workflow.selected_slot(), Some("slot-a1"));
    assert!(workflow.can_submit());
}

#[tokio::test]
async fn test_candidate_load_failure_surfaces_toast() {
    let mut api = MockApi::new();
    api.expect_get_available_doctors()
        .times(1)
        .returning(|_| Err(AppError::request_failed(Some(500), None)));

    let mut workflow = AssignmentWorkflow::new(Arc::new(api));
    let result = workflow
        .open(AssignmentTarget::BookingRequest("br-1".to_string()))
        .await;

    assert_matches!(result, Err(AssignmentError::Api(_)));
    assert_eq!(workflow.toast(), Some("Something went wrong. Please try again."));
    assert!(!workflow.can_submit());
}

#[tokio::test]
async fn test_bare_acknowledgement_completes_assignment() {
    let mut api = MockApi::new();
    api.expect_get_available_doctors().times(1).returning(|_| Ok(candidates()));
    api.expect_assign().times(1).returning(|_, _| Ok(None));

    let mut workflow = AssignmentWorkflow::new(Arc::new(api));
    workflow
        .open(AssignmentTarget::BookingRequest("br-2".to_string()))
        .await
        .unwrap();

    assert_matches!(workflow.submit().await, Ok(None));
    assert_eq!(workflow.phase(), &AssignmentPhase::Success);
    assert!(workflow.toast().is_none());
}
