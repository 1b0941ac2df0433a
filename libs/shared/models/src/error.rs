use thiserror::Error;

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Request failed: {}", .message.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE))]
    RequestFailed {
        status: Option<u16>,
        message: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl AppError {
    pub fn request_failed(status: Option<u16>, message: Option<String>) -> Self {
        AppError::RequestFailed {
            status,
            message: message.filter(|m| !m.trim().is_empty()),
        }
    }

    /// Text for the toast shown at the failing control.
    ///
    /// Validation messages are already user-facing. Request failures carry the
    /// server message when one was sent; everything else falls back to the
    /// generic copy.
    pub fn toast_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Auth(msg) | AppError::NotFound(msg) if !msg.is_empty() => msg.clone(),
            AppError::RequestFailed { message: Some(msg), .. } => msg.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_prefers_server_message() {
        let err = AppError::request_failed(Some(409), Some("Slot already taken".to_string()));
        assert_eq!(err.toast_message(), "Slot already taken");
    }

    #[test]
    fn test_toast_falls_back_to_generic() {
        assert_eq!(AppError::request_failed(None, Some("  ".to_string())).toast_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(AppError::Network("connection refused".to_string()).toast_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(AppError::Decode("eof".to_string()).toast_message(), GENERIC_ERROR_MESSAGE);
    }
}
