use thiserror::Error;

use shared_models::AppError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssignmentError {
    #[error("Please select a doctor")]
    NoDoctorSelected,

    #[error("Please select a time slot")]
    NoSlotSelected,

    #[error("Doctor {0} is not available for this request")]
    UnknownDoctor(String),

    #[error("Slot {0} does not belong to the selected doctor")]
    SlotMismatch(String),

    #[error("No assignment is open")]
    NotOpen,

    #[error("An assignment request is already in progress")]
    RequestInFlight,

    #[error(transparent)]
    Api(#[from] AppError),
}

impl AssignmentError {
    pub fn is_local(&self) -> bool {
        !matches!(self, AssignmentError::Api(_))
    }

    pub fn toast_message(&self) -> String {
        match self {
            AssignmentError::Api(err) => err.toast_message(),
            other => other.to_string(),
        }
    }
}
