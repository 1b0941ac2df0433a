use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::{debug, info};

use shared_api::ApiClient;
use shared_utils::time::{format_date_local, parse_time};

use crate::models::{
    DoctorError, GenerateSchedulesRequest, GenerateSchedulesResult, SaveWorkingHoursRequest,
    WorkingHours,
};

/// Reads and edits the weekly template. Slot generation itself happens
/// server-side; this service only triggers it.
pub struct WorkingHoursService {
    client: ApiClient,
}

impl WorkingHoursService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Doctor id of the signed-in session.
    pub fn current_doctor_id(&self) -> Result<String, DoctorError> {
        self.client
            .session()
            .current_user_id()
            .ok_or(DoctorError::NotSignedIn)
    }

    pub async fn get_working_hours(&self, doctor_id: &str) -> Result<Vec<WorkingHours>, DoctorError> {
        debug!("Fetching working hours for doctor: {}", doctor_id);

        let mut hours: Vec<WorkingHours> = self
            .client
            .get("/working-hours", &[("doctorId", doctor_id.to_string())])
            .await?;

        hours.sort_by_key(|h| h.day_of_week);
        Ok(hours)
    }

    pub async fn save_working_hours(
        &self,
        doctor_id: &str,
        working_hours: Vec<WorkingHours>,
    ) -> Result<Vec<WorkingHours>, DoctorError> {
        validate_working_hours(&working_hours)?;

        let request = SaveWorkingHoursRequest {
            doctor_id: doctor_id.to_string(),
            working_hours,
        };

        debug!("Saving {} working hour entries for doctor: {}", request.working_hours.len(), doctor_id);

        let body = serde_json::to_value(&request)
            .map_err(|e| DoctorError::InvalidWorkingHours(e.to_string()))?;
        let saved: Vec<WorkingHours> = self.client.post("/working-hours", body).await?;

        info!("Working hours saved for doctor: {}", doctor_id);
        Ok(saved)
    }

    /// Asks the server to turn the template into slots for `[start, end]`.
    pub async fn generate_schedules(
        &self,
        doctor_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<GenerateSchedulesResult, DoctorError> {
        if end_date < start_date {
            return Err(DoctorError::InvalidWorkingHours(
                "End date must not be before start date".to_string(),
            ));
        }

        let request = GenerateSchedulesRequest {
            doctor_id: doctor_id.to_string(),
            start_date: format_date_local(start_date),
            end_date: format_date_local(end_date),
        };

        let body = serde_json::to_value(&request)
            .map_err(|e| DoctorError::InvalidWorkingHours(e.to_string()))?;
        let result: GenerateSchedulesResult = self
            .client
            .post("/working-hours/generate-schedules", body)
            .await?;

        info!(
            "Generated {} slots for doctor {} ({} to {})",
            result.slots_created, doctor_id, request.start_date, request.end_date
        );
        Ok(result)
    }
}

/// Client-side checks before a save request is sent.
pub fn validate_working_hours(hours: &[WorkingHours]) -> Result<(), DoctorError> {
    let mut seen_days = HashSet::new();

    for entry in hours {
        if entry.day_of_week > 6 {
            return Err(DoctorError::InvalidWorkingHours(
                "Day of week must be between 0 (Sunday) and 6 (Saturday)".to_string(),
            ));
        }

        if !seen_days.insert(entry.day_of_week) {
            return Err(DoctorError::InvalidWorkingHours(format!(
                "{} is listed more than once",
                entry.day_name()
            )));
        }

        let (start, end) = match (parse_time(&entry.start_time), parse_time(&entry.end_time)) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                return Err(DoctorError::InvalidWorkingHours(format!(
                    "{}: times must be HH:MM",
                    entry.day_name()
                )))
            }
        };

        if start >= end {
            return Err(DoctorError::InvalidWorkingHours(format!(
                "{}: start time must be before end time",
                entry.day_name()
            )));
        }

        if entry.slot_duration == 0 {
            return Err(DoctorError::InvalidWorkingHours(format!(
                "{}: slot duration must be positive",
                entry.day_name()
            )));
        }
    }

    Ok(())
}
