use std::sync::Arc;
use std::time::Duration;

use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION},
    Method,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, error, warn};

use shared_config::AppConfig;
use shared_models::{ApiResponse, AppError, SessionStore};

/// HTTP transport for the clinic REST backend.
///
/// Every call attaches the session's bearer token (when there is one) and
/// unwraps the `{success, data, message}` envelope, so callers only ever see
/// decoded `data` or an `AppError`.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: Arc<dyn SessionStore>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: config.base_url().to_string(),
            session,
        }
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }

    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.session.auth_token() {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => warn!("Auth token contains invalid header characters, sending without it"),
            }
        }

        headers
    }

    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        let mut req = self.client.request(method, &url).headers(self.get_headers());

        if !query.is_empty() {
            req = req.query(query);
        }

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("API error ({}): {}", status, text);

            let message = serde_json::from_str::<ApiResponse>(&text)
                .ok()
                .and_then(|envelope| envelope.message);

            return Err(match status.as_u16() {
                401 | 403 => AppError::Auth(message.unwrap_or_default()),
                404 => AppError::NotFound(message.unwrap_or_default()),
                code => AppError::request_failed(Some(code), message),
            });
        }

        let envelope: ApiResponse = serde_json::from_str(&text)
            .map_err(|e| AppError::Decode(format!("Malformed response envelope: {}", e)))?;

        if !envelope.success {
            warn!("Request to {} reported failure: {:?}", path, envelope.message);
        }

        envelope.into_result()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, AppError> {
        self.request(Method::GET, path, query, None).await
    }

    pub async fn post<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T, AppError> {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    pub async fn put<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T, AppError> {
        self.request(Method::PUT, path, &[], Some(body)).await
    }

    /// JSON body for a request. A body that cannot be encoded is an internal
    /// fault, never something to show the user verbatim.
    pub fn to_body<B: Serialize>(body: &B) -> Result<Value, AppError> {
        serde_json::to_value(body).map_err(|e| AppError::Decode(format!("Unencodable request body: {}", e)))
    }
}
