use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual weight of a badge or slot; the UI layer maps it to colour classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Info,
    Warning,
    Danger,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
    Rescheduled,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 7] = [
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::InProgress,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::NoShow,
        AppointmentStatus::Rescheduled,
    ];

    /// Patient and doctor facing label. This is the only place the mapping lives.
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Check-in Pending",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::InProgress => "In Session",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::NoShow => "No-show",
            AppointmentStatus::Rescheduled => "Rescheduled",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            AppointmentStatus::Pending => Tone::Warning,
            AppointmentStatus::Confirmed => Tone::Success,
            AppointmentStatus::InProgress => Tone::Info,
            AppointmentStatus::Completed => Tone::Neutral,
            AppointmentStatus::Cancelled => Tone::Danger,
            AppointmentStatus::NoShow => Tone::Danger,
            AppointmentStatus::Rescheduled => Tone::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "PENDING",
            AppointmentStatus::Confirmed => "CONFIRMED",
            AppointmentStatus::InProgress => "IN_PROGRESS",
            AppointmentStatus::Completed => "COMPLETED",
            AppointmentStatus::Cancelled => "CANCELLED",
            AppointmentStatus::NoShow => "NO_SHOW",
            AppointmentStatus::Rescheduled => "RESCHEDULED",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of a booking request, which exists before any appointment record does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingRequestStatus {
    Pending,
    Assigned,
    Rejected,
}

impl BookingRequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingRequestStatus::Pending => "Pending",
            BookingRequestStatus::Assigned => "Assigned",
            BookingRequestStatus::Rejected => "Rejected",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            BookingRequestStatus::Pending => Tone::Warning,
            BookingRequestStatus::Assigned => Tone::Success,
            BookingRequestStatus::Rejected => Tone::Danger,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingRequestStatus::Pending => "PENDING",
            BookingRequestStatus::Assigned => "ASSIGNED",
            BookingRequestStatus::Rejected => "REJECTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_table() {
        let labels: Vec<&str> = AppointmentStatus::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec!["Check-in Pending", "Confirmed", "In Session", "Completed", "Cancelled", "No-show", "Rescheduled"]
        );
    }

    #[test]
    fn test_wire_format_round_trips_through_serde() {
        for status in AppointmentStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
        let parsed: AppointmentStatus = serde_json::from_str("\"NO_SHOW\"").unwrap();
        assert_eq!(parsed, AppointmentStatus::NoShow);
    }
}
