// libs/appointment-cell/src/services/store.rs
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use shared_models::AppError;

use crate::models::{
    Appointment, AppointmentError, CancelAppointmentRequest, DoctorScheduleQuery, Medications,
    PatientAppointmentsQuery, RescheduleAppointmentRequest, UpdateInternalNotesRequest,
    UpdateMedicationsRequest,
};
use crate::services::api::AppointmentApi;

/// In-flight flags of one operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestState {
    pub loading: bool,
    pub error: Option<String>,
    pub success: bool,
}

impl RequestState {
    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
        self.success = false;
    }

    fn succeed(&mut self) {
        self.loading = false;
        self.success = true;
    }

    fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn clear(&mut self) {
        *self = RequestState::default();
    }
}

/// Which list the store currently mirrors, kept so mutations can refetch it.
#[derive(Debug, Clone, PartialEq)]
pub enum ListSource {
    Patient {
        patient_id: String,
        query: PatientAppointmentsQuery,
    },
    DoctorSchedule {
        doctor_id: String,
        query: DoctorScheduleQuery,
    },
}

/// Client-side cache of appointment records plus per-operation flags.
///
/// Records are only ever replaced whole with what the server returned.
pub struct AppointmentStore {
    api: Arc<dyn AppointmentApi>,
    appointments: Vec<Appointment>,
    source: Option<ListSource>,
    fetch: RequestState,
    reschedule: RequestState,
    cancel: RequestState,
    update: RequestState,
}

impl AppointmentStore {
    pub fn new(api: Arc<dyn AppointmentApi>) -> Self {
        Self {
            api,
            appointments: Vec::new(),
            source: None,
            fetch: RequestState::default(),
            reschedule: RequestState::default(),
            cancel: RequestState::default(),
            update: RequestState::default(),
        }
    }

    pub fn api(&self) -> Arc<dyn AppointmentApi> {
        Arc::clone(&self.api)
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn get(&self, appointment_id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == appointment_id)
    }

    pub fn source(&self) -> Option<&ListSource> {
        self.source.as_ref()
    }

    pub fn fetch_state(&self) -> &RequestState {
        &self.fetch
    }

    pub fn reschedule_state(&self) -> &RequestState {
        &self.reschedule
    }

    pub fn cancel_state(&self) -> &RequestState {
        &self.cancel
    }

    pub fn update_state(&self) -> &RequestState {
        &self.update
    }

    // ==========================================================================
    // LIST FETCHES
    // ==========================================================================

    pub async fn fetch_patient_appointments(
        &mut self,
        patient_id: &str,
        query: PatientAppointmentsQuery,
    ) -> Result<(), AppError> {
        self.load(ListSource::Patient {
            patient_id: patient_id.to_string(),
            query,
        })
        .await
    }

    pub async fn fetch_doctor_schedule(
        &mut self,
        doctor_id: &str,
        query: DoctorScheduleQuery,
    ) -> Result<(), AppError> {
        self.load(ListSource::DoctorSchedule {
            doctor_id: doctor_id.to_string(),
            query,
        })
        .await
    }

    /// Reloads whichever list was fetched last.
    pub async fn refetch(&mut self) -> Result<(), AppError> {
        match self.source.clone() {
            Some(source) => self.load(source).await,
            None => {
                debug!("Nothing to refetch, no list loaded yet");
                Ok(())
            }
        }
    }

    async fn load(&mut self, source: ListSource) -> Result<(), AppError> {
        self.fetch.begin();

        let result = match &source {
            ListSource::Patient { patient_id, query } => {
                self.api
                    .get_patient_appointments(patient_id.clone(), query.clone())
                    .await
            }
            ListSource::DoctorSchedule { doctor_id, query } => {
                self.api
                    .get_doctor_schedule(doctor_id.clone(), query.clone())
                    .await
            }
        };

        self.source = Some(source);

        match result {
            Ok(appointments) => {
                debug!("Loaded {} appointments", appointments.len());
                self.appointments = appointments;
                self.fetch.succeed();
                Ok(())
            }
            Err(e) => {
                error!("Failed to load appointments: {}", e);
                self.fetch.fail(e.toast_message());
                Err(e)
            }
        }
    }

    /// Background read whose failure is only logged; the caller still renders
    /// the rest of its view. Does not touch the cached list or its flags.
    pub async fn fetch_doctor_schedule_best_effort(
        &self,
        doctor_id: &str,
        query: DoctorScheduleQuery,
    ) -> Vec<Appointment> {
        match self.api.get_doctor_schedule(doctor_id.to_string(), query).await {
            Ok(appointments) => appointments,
            Err(e) => {
                warn!("Best-effort schedule fetch for doctor {} failed: {}", doctor_id, e);
                Vec::new()
            }
        }
    }

    // ==========================================================================
    // MUTATIONS
    // ==========================================================================

    /// Sends the reschedule. The server may or may not echo the record back.
    pub async fn reschedule(
        &mut self,
        request: RescheduleAppointmentRequest,
    ) -> Result<Option<Appointment>, AppointmentError> {
        if self.reschedule.loading {
            return Err(AppointmentError::RequestInFlight("reschedule"));
        }

        self.reschedule.begin();
        let appointment_id = request.appointment_id.clone();

        let result = self.api.reschedule_appointment(request).await;
        match result {
            Ok(appointment) => {
                info!("Appointment {} rescheduled", appointment_id);
                self.reschedule.succeed();
                Ok(appointment)
            }
            Err(e) => {
                error!("Reschedule of {} failed: {}", appointment_id, e);
                self.reschedule.fail(e.toast_message());
                Err(e.into())
            }
        }
    }

    pub async fn cancel(
        &mut self,
        request: CancelAppointmentRequest,
    ) -> Result<Option<Appointment>, AppointmentError> {
        if self.cancel.loading {
            return Err(AppointmentError::RequestInFlight("cancel"));
        }

        self.cancel.begin();
        let appointment_id = request.appointment_id.clone();

        let result = self.api.cancel_appointment(request).await;
        match result {
            Ok(appointment) => {
                info!("Appointment {} cancelled", appointment_id);
                self.cancel.succeed();
                Ok(appointment)
            }
            Err(e) => {
                error!("Cancel of {} failed: {}", appointment_id, e);
                self.cancel.fail(e.toast_message());
                Err(e.into())
            }
        }
    }

    pub fn clear_reschedule_flags(&mut self) {
        self.reschedule.clear();
    }

    pub fn clear_cancel_flags(&mut self) {
        self.cancel.clear();
    }

    pub async fn update_medications(
        &mut self,
        appointment_id: &str,
        medications: Medications,
        merge: bool,
    ) -> Result<Appointment, AppointmentError> {
        let request = UpdateMedicationsRequest { medications, merge };
        let api = self.api();
        let call = api.update_medications(appointment_id.to_string(), request);
        self.run_update(call).await.map_err(AppointmentError::from)
    }

    pub async fn update_internal_notes(
        &mut self,
        appointment_id: &str,
        internal_notes: &str,
    ) -> Result<Appointment, AppointmentError> {
        let request = UpdateInternalNotesRequest {
            internal_notes: internal_notes.to_string(),
        };
        let api = self.api();
        let call = api.update_internal_notes(appointment_id.to_string(), request);
        self.run_update(call).await.map_err(AppointmentError::from)
    }

    async fn run_update<F>(&mut self, call: F) -> Result<Appointment, AppError>
    where
        F: std::future::Future<Output = Result<Appointment, AppError>>,
    {
        self.update.begin();

        match call.await {
            Ok(appointment) => {
                self.update.succeed();
                self.replace_record(appointment.clone());
                Ok(appointment)
            }
            Err(e) => {
                error!("Appointment update failed: {}", e);
                self.update.fail(e.toast_message());
                Err(e)
            }
        }
    }

    /// Swaps in the server's copy of a record; never merges fields.
    pub fn replace_record(&mut self, appointment: Appointment) {
        match self.appointments.iter_mut().find(|a| a.id == appointment.id) {
            Some(existing) => *existing = appointment,
            None => debug!("Record {} not in the cached list, not inserting", appointment.id),
        }
    }
}
