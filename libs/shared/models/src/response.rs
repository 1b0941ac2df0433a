use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// The `{success, data, message}` envelope every clinic endpoint answers with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T = Value> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiResponse<Value> {
    /// Uniform failure path: `success=false` is an error whatever the endpoint.
    /// A missing `data` field decodes as JSON `null`, which suits `()` and `Option<_>`.
    pub fn into_result<T: DeserializeOwned>(self) -> Result<T, AppError> {
        if !self.success {
            return Err(AppError::request_failed(None, self.message));
        }

        serde_json::from_value(self.data.unwrap_or(Value::Null))
            .map_err(|e| AppError::Decode(format!("Unexpected response data: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_false_is_failure_with_message() {
        let envelope: ApiResponse = serde_json::from_value(json!({
            "success": false,
            "message": "Appointment not found"
        })).unwrap();

        let result: Result<Value, AppError> = envelope.into_result();
        assert_eq!(
            result.unwrap_err(),
            AppError::RequestFailed { status: None, message: Some("Appointment not found".to_string()) }
        );
    }

    #[test]
    fn test_missing_data_decodes_as_unit() {
        let envelope: ApiResponse = serde_json::from_value(json!({ "success": true })).unwrap();
        let result: Result<(), AppError> = envelope.into_result();
        assert!(result.is_ok());
    }
}
