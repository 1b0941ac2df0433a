use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use doctor_cell::models::Slot;
use shared_api::ApiClient;
use shared_models::AppError;
use shared_utils::time::format_date_local;

use crate::models::{
    Appointment, CancelAppointmentRequest, DoctorScheduleQuery, PatientAppointmentsQuery,
    RescheduleAppointmentRequest, UpdateInternalNotesRequest, UpdateMedicationsRequest,
};

/// Appointment endpoints the views depend on. Record updates return the whole
/// server record so the store can replace rather than merge. Reschedule and
/// cancel may acknowledge without a record; callers refetch either way.
#[async_trait]
pub trait AppointmentApi: Send + Sync {
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

pub struct HttpAppointmentApi {
    client: ApiClient,
}

impl HttpAppointmentApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AppointmentApi for HttpAppointmentApi {
    async fn get_patient_appointments(
        &self,
        patient_id: String,
        query: PatientAppointmentsQuery,
    ) -> Result<Vec<Appointment>, AppError> {
        debug!("Fetching appointments for patient: {}", patient_id);

        let path = format!("/appointments/patient/{}", patient_id);
        self.client.get(&path, &query.to_query_pairs()).await
    }

    async fn get_doctor_schedule(
        &self,
        doctor_id: String,
        query: DoctorScheduleQuery,
    ) -> Result<Vec<Appointment>, AppError> {
        debug!("Fetching schedule for doctor: {} ({:?})", doctor_id, query);

        let path = format!("/appointments/doctor/{}/schedule", doctor_id);
        self.client.get(&path, &query.to_query_pairs()).await
    }

    async fn get_available_slots(
        &self,
        doctor_id: String,
        date: NaiveDate,
        service_id: Option<String>,
    ) -> Result<Vec<Slot>, AppError> {
        let mut query = vec![("date", format_date_local(date))];
        if let Some(service_id) = service_id {
            query.push(("serviceId", service_id));
        }

        let path = format!("/appointments/doctor/{}/available-slots", doctor_id);
        self.client.get(&path, &query).await
    }

    async fn reschedule_appointment(&self, request: RescheduleAppointmentRequest) -> Result<Option<Appointment>, AppError> {
        debug!("Rescheduling appointment {} to slot {}", request.appointment_id, request.new_slot_id);
        self.client.post("/appointments/reschedule", ApiClient::to_body(&request)?).await
    }

    async fn cancel_appointment(&self, request: CancelAppointmentRequest) -> Result<Option<Appointment>, AppError> {
        debug!("Cancelling appointment {}", request.appointment_id);
        self.client.post("/appointments/cancel", ApiClient::to_body(&request)?).await
    }

    async fn update_medications(
        &self,
        appointment_id: String,
        request: UpdateMedicationsRequest,
    ) -> Result<Appointment, AppError> {
        let path = format!("/appointments/{}/medications", appointment_id);
        self.client.put(&path, ApiClient::to_body(&request)?).await
    }

    async fn update_internal_notes(
        &self,
        appointment_id: String,
        request: UpdateInternalNotesRequest,
    ) -> Result<Appointment, AppError> {
        let path = format!("/appointments/{}/internal-notes", appointment_id);
        self.client.put(&path, ApiClient::to_body(&request)?).await
    }
}
