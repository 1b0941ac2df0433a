use std::collections::BTreeMap;

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use appointment_cell::models::{
    AppointmentStatus, CancelAppointmentRequest, PatientAppointmentsQuery, RescheduleAppointmentRequest,
    UpdateMedicationsRequest,
};
use appointment_cell::services::{AppointmentApi, HttpAppointmentApi, ScheduleRange};
use doctor_cell::models::SlotStatus;
use shared_api::ApiClient;
use shared_models::AppError;
use shared_utils::test_utils::{MockApiResponses, TestConfig, TestSession};
use shared_utils::time::parse_date_local;

fn api_for(server: &MockServer) -> HttpAppointmentApi {
    let config = TestConfig::with_base_url(&server.uri()).to_app_config();
    HttpAppointmentApi::new(ApiClient::new(&config, TestSession::patient("patient-1")))
}

fn date(value: &str) -> chrono::NaiveDate {
    parse_date_local(value).unwrap()
}

#[tokio::test]
async fn test_patient_appointments_keep_calendar_date() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/appointments/patient/patient-1"))
        .and(header("authorization", "Bearer test-auth-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockApiResponses::success(json!([
            MockApiResponses::appointment("a-1", date("2024-06-10"), "09:30", "CONFIRMED"),
            MockApiResponses::pending_appointment("a-2", date("2024-06-11"), "14:00"),
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let appointments = api_for(&server)
        .get_patient_appointments("patient-1".to_string(), PatientAppointmentsQuery::default())
        .await
        .unwrap();

    assert_eq!(appointments.len(), 2);
    assert_eq!(appointments[0].id, "a-1");
    assert_eq!(appointments[0].appointment_date, date("2024-06-10"));
    assert_eq!(appointments[0].status, AppointmentStatus::Confirmed);
    assert!(appointments[0].is_assigned());
    assert_eq!(appointments[1].status, AppointmentStatus::Pending);
    assert!(!appointments[1].is_assigned());
}

#[tokio::test]
async fn test_doctor_schedule_sends_local_date_range() {
    let server = MockServer::start().await;
    let today = date("2024-12-31");

    Mock::given(method("GET"))
        .and(path("/appointments/doctor/doctor-1/schedule"))
        .and(query_param("startDate", "2025-01-01"))
        .and(query_param("endDate", "2025-01-07"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockApiResponses::success(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let appointments = api_for(&server)
        .get_doctor_schedule("doctor-1".to_string(), ScheduleRange::Upcoming.to_query(today))
        .await
        .unwrap();

    assert!(appointments.is_empty());
}

#[tokio::test]
async fn test_available_slots_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/appointments/doctor/doctor-1/available-slots"))
        .and(query_param("date", "2024-06-12"))
        .and(query_param("serviceId", "service-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockApiResponses::success(json!([
            MockApiResponses::slot("s-1", "09:00", "09:30", "available"),
            MockApiResponses::slot("s-2", "09:30", "10:00", "available"),
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let slots = api_for(&server)
        .get_available_slots("doctor-1".to_string(), date("2024-06-12"), Some("service-1".to_string()))
        .await
        .unwrap();

    assert_eq!(slots.len(), 2);
    assert!(slots.iter().all(|s| s.status == SlotStatus::Available));
}

#[tokio::test]
async fn test_reschedule_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/appointments/reschedule"))
        .and(body_json(json!({
            "appointmentId": "a-1",
            "newSlotId": "s-2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockApiResponses::success(
            MockApiResponses::appointment("a-1", date("2024-06-12"), "09:30", "CONFIRMED"),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let updated = api_for(&server)
        .reschedule_appointment(RescheduleAppointmentRequest {
            appointment_id: "a-1".to_string(),
            new_slot_id: "s-2".to_string(),
            reason: None,
        })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.appointment_time, "09:30");
}

#[tokio::test]
async fn test_cancel_body_and_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/appointments/cancel"))
        .and(body_json(json!({
            "appointmentId": "a-1",
            "cancellationReason": "Feeling better"
        })))
        .respond_with(ResponseTemplate::new(400).set_body_json(MockApiResponses::failure(
            "Appointments cannot be cancelled after they start",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let result = api_for(&server)
        .cancel_appointment(CancelAppointmentRequest {
            appointment_id: "a-1".to_string(),
            cancellation_reason: "Feeling better".to_string(),
        })
        .await;

    let err = result.unwrap_err();
    assert_matches!(err, AppError::RequestFailed { status: Some(400), .. });
    assert_eq!(err.toast_message(), "Appointments cannot be cancelled after they start");
}

#[tokio::test]
async fn test_cancel_acknowledged_without_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/appointments/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Appointment cancelled"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = api_for(&server)
        .cancel_appointment(CancelAppointmentRequest {
            appointment_id: "a-1".to_string(),
            cancellation_reason: "Feeling better".to_string(),
        })
        .await;

    assert_matches!(result, Ok(None));
}

#[tokio::test]
async fn test_update_medications_put() {
    let server = MockServer::start().await;

    let mut medications = BTreeMap::new();
    medications.insert("Diabetes".to_string(), vec!["Metformin".to_string()]);

    let mut record = MockApiResponses::appointment("a-1", date("2024-06-10"), "09:30", "COMPLETED");
    record["medications"] = json!({ "Diabetes": ["Metformin"] });

    Mock::given(method("PUT"))
        .and(path("/appointments/a-1/medications"))
        .and(body_json(json!({
            "medications": { "Diabetes": ["Metformin"] },
            "merge": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockApiResponses::success(record)))
        .expect(1)
        .mount(&server)
        .await;

    let updated = api_for(&server)
        .update_medications(
            "a-1".to_string(),
            UpdateMedicationsRequest {
                medications: medications.clone(),
                merge: false,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.medications, medications);
}
