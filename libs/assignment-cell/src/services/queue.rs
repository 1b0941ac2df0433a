// libs/assignment-cell/src/services/queue.rs
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error};

use appointment_cell::models::Appointment;
use appointment_cell::services::{AppointmentLifecycleService, AppointmentRow, Audience, RequestState};
use shared_models::{AppError, BookingRequestStatus, Tone};

use crate::models::{AssignmentTarget, BookingRequest};
use crate::services::api::AssignmentApi;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRequestRow {
    pub id: String,
    pub patient: Option<String>,
    pub service: Option<String>,
    pub date_label: String,
    pub time_label: String,
    pub status_label: &'static str,
    pub status_tone: Tone,
    pub can_assign: bool,
}

impl From<&BookingRequest> for BookingRequestRow {
    fn from(request: &BookingRequest) -> Self {
        Self {
            id: request.id.clone(),
            patient: request.patient_name.clone(),
            service: request.service_name.clone(),
            date_label: request.date_label(),
            time_label: request.time_label(),
            status_label: request.status.label(),
            status_tone: request.status.tone(),
            can_assign: request.status == BookingRequestStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueueView {
    pub booking_requests: Vec<BookingRequestRow>,
    pub unassigned: Vec<AppointmentRow>,
}

/// Admin work queue: booking requests plus appointments still missing a doctor or slot.
pub struct AssignmentQueue {
    api: Arc<dyn AssignmentApi>,
    booking_requests: Vec<BookingRequest>,
    unassigned: Vec<Appointment>,
    status_filter: Option<BookingRequestStatus>,
    fetch: RequestState,
}

impl AssignmentQueue {
    pub fn new(api: Arc<dyn AssignmentApi>) -> Self {
        Self {
            api,
            booking_requests: Vec::new(),
            unassigned: Vec::new(),
            status_filter: Some(BookingRequestStatus::Pending),
            fetch: RequestState::default(),
        }
    }

    pub fn booking_requests(&self) -> &[BookingRequest] {
        &self.booking_requests
    }

    pub fn unassigned(&self) -> &[Appointment] {
        &self.unassigned
    }

    pub fn fetch_state(&self) -> &RequestState {
        &self.fetch
    }

    pub fn status_filter(&self) -> Option<BookingRequestStatus> {
        self.status_filter
    }

    pub async fn set_status_filter(&mut self, status: Option<BookingRequestStatus>) -> Result<(), AppError> {
        self.status_filter = status;
        self.load().await
    }

    pub async fn load(&mut self) -> Result<(), AppError> {
        self.fetch = RequestState {
            loading: true,
            ..RequestState::default()
        };

        let result = self.fetch_both().await;
        match result {
            Ok((requests, unassigned)) => {
                debug!(
                    "Queue loaded: {} booking requests, {} unassigned appointments",
                    requests.len(),
                    unassigned.len()
                );
                self.booking_requests = requests;
                self.unassigned = unassigned;
                self.fetch = RequestState {
                    success: true,
                    ..RequestState::default()
                };
                Ok(())
            }
            Err(e) => {
                error!("Failed to load assignment queue: {}", e);
                self.fetch = RequestState {
                    error: Some(e.toast_message()),
                    ..RequestState::default()
                };
                Err(e)
            }
        }
    }

    async fn fetch_both(&self) -> Result<(Vec<BookingRequest>, Vec<Appointment>), AppError> {
        let requests = self.api.get_booking_requests(self.status_filter).await?;
        let unassigned = self.api.get_unassigned_appointments().await?;
        Ok((requests, unassigned))
    }

    /// Targets still waiting for a doctor, booking requests first.
    pub fn targets(&self) -> Vec<AssignmentTarget> {
        self.booking_requests
            .iter()
            .filter(|r| r.status == BookingRequestStatus::Pending)
            .map(|r| AssignmentTarget::BookingRequest(r.id.clone()))
            .chain(
                self.unassigned
                    .iter()
                    .filter(|a| !a.is_assigned())
                    .map(|a| AssignmentTarget::Appointment(a.id.clone())),
            )
            .collect()
    }

    pub fn view(&self) -> QueueView {
        let lifecycle = AppointmentLifecycleService::new();

        QueueView {
            booking_requests: self.booking_requests.iter().map(BookingRequestRow::from).collect(),
            unassigned: self
                .unassigned
                .iter()
                .map(|a| AppointmentRow::build(a, Audience::Admin, &lifecycle))
                .collect(),
        }
    }
}
