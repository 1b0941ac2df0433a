use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::models::{Appointment, AppointmentStatus, DoctorScheduleQuery};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateBucket {
    Today,
    Upcoming,
    Past,
}

impl DateBucket {
    /// Exactly one bucket per calendar date, relative to `today`.
    pub fn for_date(date: NaiveDate, today: NaiveDate) -> Self {
        if date == today {
            DateBucket::Today
        } else if date > today {
            DateBucket::Upcoming
        } else {
            DateBucket::Past
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DateBucket::Today => "Today",
            DateBucket::Upcoming => "Upcoming",
            DateBucket::Past => "Past",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatePartition {
    pub today: Vec<Appointment>,
    pub upcoming: Vec<Appointment>,
    pub past: Vec<Appointment>,
}

impl DatePartition {
    pub fn bucket(&self, bucket: DateBucket) -> &[Appointment] {
        match bucket {
            DateBucket::Today => &self.today,
            DateBucket::Upcoming => &self.upcoming,
            DateBucket::Past => &self.past,
        }
    }

    pub fn len(&self) -> usize {
        self.today.len() + self.upcoming.len() + self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits appointments into Today / Upcoming / Past by calendar date.
///
/// Cancelled appointments are left out of all three. Any other status,
/// including a completed appointment dated today, stays in its date bucket.
/// Today and Upcoming are sorted soonest first, Past most recent first.
pub fn partition_by_date(appointments: &[Appointment], today: NaiveDate) -> DatePartition {
    let mut partition = DatePartition::default();

    for appointment in appointments
        .iter()
        .filter(|a| a.status != AppointmentStatus::Cancelled)
    {
        match DateBucket::for_date(appointment.appointment_date, today) {
            DateBucket::Today => partition.today.push(appointment.clone()),
            DateBucket::Upcoming => partition.upcoming.push(appointment.clone()),
            DateBucket::Past => partition.past.push(appointment.clone()),
        }
    }

    let chronological = |a: &Appointment, b: &Appointment| {
        (a.appointment_date, a.appointment_time.as_str()).cmp(&(b.appointment_date, b.appointment_time.as_str()))
    };
    partition.today.sort_by(chronological);
    partition.upcoming.sort_by(chronological);
    partition.past.sort_by(|a, b| chronological(b, a));

    partition
}

/// Named ranges of the doctor schedule filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleRange {
    Today,
    Tomorrow,
    Upcoming,
    Recent,
}

impl ScheduleRange {
    pub const ALL: [ScheduleRange; 4] = [
        ScheduleRange::Today,
        ScheduleRange::Tomorrow,
        ScheduleRange::Upcoming,
        ScheduleRange::Recent,
    ];

    /// Inclusive `[start, end]` in local calendar days.
    pub fn bounds(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            ScheduleRange::Today => (today, today),
            ScheduleRange::Tomorrow => (today + Duration::days(1), today + Duration::days(1)),
            ScheduleRange::Upcoming => (today + Duration::days(1), today + Duration::days(7)),
            ScheduleRange::Recent => (today - Duration::days(7), today),
        }
    }

    pub fn to_query(&self, today: NaiveDate) -> DoctorScheduleQuery {
        let (start, end) = self.bounds(today);
        DoctorScheduleQuery::between(start, end)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScheduleRange::Today => "Today",
            ScheduleRange::Tomorrow => "Tomorrow",
            ScheduleRange::Upcoming => "Next 7 days",
            ScheduleRange::Recent => "Last 7 days",
        }
    }
}
