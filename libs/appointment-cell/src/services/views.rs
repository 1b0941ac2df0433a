// libs/appointment-cell/src/services/views.rs
use chrono::NaiveDate;
use serde::Serialize;

use shared_models::Tone;

use crate::models::Appointment;
use crate::services::lifecycle::{AppointmentLifecycleService, Audience, RowAction};
use crate::services::partition::{partition_by_date, DateBucket, ScheduleRange};
use crate::services::store::AppointmentStore;

/// One rendered row of an appointment list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentRow {
    pub id: String,
    pub date_label: String,
    pub time_label: String,
    pub status_label: &'static str,
    pub status_tone: Tone,
    /// The other party: doctor for patients, patient for doctors and admins.
    pub counterpart: Option<String>,
    pub service: Option<String>,
    pub has_meeting_link: bool,
    pub actions: Vec<RowAction>,
}

impl AppointmentRow {
    pub fn build(appointment: &Appointment, audience: Audience, lifecycle: &AppointmentLifecycleService) -> Self {
        let counterpart = match audience {
            Audience::Patient => appointment.doctor_name.clone(),
            Audience::Doctor | Audience::Admin => appointment.patient_name.clone(),
        };

        Self {
            id: appointment.id.clone(),
            date_label: appointment.date_label(),
            time_label: appointment.time_label(),
            status_label: appointment.status.label(),
            status_tone: appointment.status.tone(),
            counterpart,
            service: appointment.service_name.clone(),
            has_meeting_link: appointment
                .google_meet_link
                .as_deref()
                .is_some_and(|l| !l.trim().is_empty()),
            actions: lifecycle.row_actions(appointment, audience),
        }
    }
}

/// What a list section shows. Empty is its own state, never a spinner or error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SectionState {
    Loading,
    Error(String),
    Empty(&'static str),
    Ready(Vec<AppointmentRow>),
}

pub fn empty_message(bucket: DateBucket) -> &'static str {
    match bucket {
        DateBucket::Today => "No appointments today",
        DateBucket::Upcoming => "No upcoming appointments",
        DateBucket::Past => "No past appointments",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub today: SectionState,
    pub upcoming: SectionState,
    pub past: SectionState,
}

impl DashboardView {
    /// Today / Upcoming / Past sections over the store's current list.
    pub fn build(store: &AppointmentStore, today: NaiveDate, audience: Audience) -> Self {
        let fetch = store.fetch_state();
        if fetch.loading {
            return Self::uniform(SectionState::Loading);
        }
        if let Some(message) = &fetch.error {
            return Self::uniform(SectionState::Error(message.clone()));
        }

        let lifecycle = AppointmentLifecycleService::new();
        let partition = partition_by_date(store.appointments(), today);

        let section = |bucket: DateBucket| {
            let rows: Vec<AppointmentRow> = partition
                .bucket(bucket)
                .iter()
                .map(|a| AppointmentRow::build(a, audience, &lifecycle))
                .collect();

            if rows.is_empty() {
                SectionState::Empty(empty_message(bucket))
            } else {
                SectionState::Ready(rows)
            }
        };

        Self {
            today: section(DateBucket::Today),
            upcoming: section(DateBucket::Upcoming),
            past: section(DateBucket::Past),
        }
    }

    fn uniform(state: SectionState) -> Self {
        Self {
            today: state.clone(),
            upcoming: state.clone(),
            past: state,
        }
    }
}

/// Doctor landing page: the selected schedule range from the store plus a
/// best-effort "next 7 days" list that never surfaces an error.
pub struct DoctorDashboard {
    pub range: ScheduleRange,
    pub schedule: SectionState,
    pub upcoming: Vec<AppointmentRow>,
}

impl DoctorDashboard {
    pub async fn load(
        store: &mut AppointmentStore,
        doctor_id: &str,
        range: ScheduleRange,
        today: NaiveDate,
    ) -> Self {
        let lifecycle = AppointmentLifecycleService::new();

        // Failure is recorded in the store's fetch flags and rendered below.
        let _ = store.fetch_doctor_schedule(doctor_id, range.to_query(today)).await;

        let upcoming = store
            .fetch_doctor_schedule_best_effort(doctor_id, ScheduleRange::Upcoming.to_query(today))
            .await
            .iter()
            .map(|a| AppointmentRow::build(a, Audience::Doctor, &lifecycle))
            .collect();

        let fetch = store.fetch_state();
        let schedule = if let Some(message) = &fetch.error {
            SectionState::Error(message.clone())
        } else if store.appointments().is_empty() {
            SectionState::Empty("No appointments in this range")
        } else {
            SectionState::Ready(
                store
                    .appointments()
                    .iter()
                    .map(|a| AppointmentRow::build(a, Audience::Doctor, &lifecycle))
                    .collect(),
            )
        };

        Self {
            range,
            schedule,
            upcoming,
        }
    }
}
