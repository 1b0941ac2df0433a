#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;

use appointment_cell::models::{
    Appointment, AppointmentStatus, CancelAppointmentRequest, DoctorScheduleQuery,
    PatientAppointmentsQuery, RescheduleAppointmentRequest, UpdateInternalNotesRequest,
    UpdateMedicationsRequest,
};
use appointment_cell::services::AppointmentApi;
use doctor_cell::models::{Slot, SlotStatus};
use shared_models::AppError;

mock! {
    pub Api {}

    #[async_trait]
    impl AppointmentApi for Api {
        async fn get_patient_appointments(
            &self,
            patient_id: String,
            query: PatientAppointmentsQuery,
        ) -> Result<Vec<Appointment>, AppError>;

        async fn get_doctor_schedule(
            &self,
            doctor_id: String,
            query: DoctorScheduleQuery,
        ) -> Result<Vec<Appointment>, AppError>;

        async fn get_available_slots(
            &self,
            doctor_id: String,
            date: NaiveDate,
            service_id: Option<String>,
        ) -> Result<Vec<Slot>, AppError>;

        async fn reschedule_appointment(&self, request: RescheduleAppointmentRequest) -> Result<Option<Appointment>, AppError>;

        async fn cancel_appointment(&self, request: CancelAppointmentRequest) -> Result<Option<Appointment>, AppError>;

        async fn update_medications(
            &self,
            appointment_id: String,
            request: UpdateMedicationsRequest,
        ) -> Result<Appointment, AppError>;

        async fn update_internal_notes(
            &self,
            appointment_id: String,
            request: UpdateInternalNotesRequest,
        ) -> Result<Appointment, AppError>;
    }
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn appointment(id: &str, date: NaiveDate, status: AppointmentStatus) -> Appointment {
    Appointment {
        id: id.to_string(),
        appointment_date: date,
        appointment_time: "10:00".to_string(),
        status,
        doctor_id: Some("doc-1".to_string()),
        patient_id: Some("patient-1".to_string()),
        service_id: Some("service-1".to_string()),
        slot_id: Some("slot-old".to_string()),
        duration: 30,
        patient_notes: None,
        internal_notes: None,
        medications: Default::default(),
        report_pdf_path: None,
        google_meet_link: None,
        patient_name: Some("Aoife Murphy".to_string()),
        doctor_name: Some("Dr. Byrne".to_string()),
        service_name: Some("General Consultation".to_string()),
    }
}

pub fn slot(id: &str, start: &str, status: SlotStatus) -> Slot {
    Slot {
        id: id.to_string(),
        start_time: start.to_string(),
        end_time: "23:00".to_string(),
        status,
        appointment: None,
    }
}
