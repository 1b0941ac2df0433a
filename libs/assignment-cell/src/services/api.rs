use async_trait::async_trait;
use tracing::debug;

use appointment_cell::models::Appointment;
use shared_api::ApiClient;
use shared_models::{AppError, BookingRequestStatus};

use crate::models::{AssignRequest, AssignmentTarget, BookingRequest, DoctorSlotCandidate};

/// Admin endpoints for the unassigned queue and doctor assignment.
#[async_trait]
pub trait AssignmentApi: Send + Sync {
    async fn get_booking_requests(
        &self,
        status: Option<BookingRequestStatus>,
    ) -> Result<Vec<BookingRequest>, AppError>;

    async fn get_unassigned_appointments(&self) -> Result<Vec<Appointment>, AppError>;

    /// Candidates are filtered by the server to the target's time window.
    async fn get_available_doctors(&self, target: AssignmentTarget) -> Result<Vec<DoctorSlotCandidate>, AppError>;

    /// The created or updated appointment, when the server sends it back.
    async fn assign(&self, target: AssignmentTarget, request: AssignRequest) -> Result<Option<Appointment>, AppError>;
}

pub struct HttpAssignmentApi {
    client: ApiClient,
}

impl HttpAssignmentApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AssignmentApi for HttpAssignmentApi {
    async fn get_booking_requests(
        &self,
        status: Option<BookingRequestStatus>,
    ) -> Result<Vec<BookingRequest>, AppError> {
        let query: Vec<(&str, String)> = status
            .map(|s| vec![("status", s.as_str().to_string())])
            .unwrap_or_default();

        debug!("Fetching booking requests ({:?})", status);
        self.client.get("/admin/booking-requests", &query).await
    }

    async fn get_unassigned_appointments(&self) -> Result<Vec<Appointment>, AppError> {
        debug!("Fetching unassigned appointments");
        self.client.get("/admin/appointments/unassigned", &[]).await
    }

    async fn get_available_doctors(&self, target: AssignmentTarget) -> Result<Vec<DoctorSlotCandidate>, AppError> {
        debug!("Fetching available doctors for {:?}", target);
        self.client.get(&target.available_doctors_path(), &[]).await
    }

    async fn assign(&self, target: AssignmentTarget, request: AssignRequest) -> Result<Option<Appointment>, AppError> {
        debug!("Assigning doctor {} slot {} to {:?}", request.doctor_id, request.slot_id, target);

        let body = ApiClient::to_body(&request)?;
        self.client.post(&target.assign_path(), body).await
    }
}
