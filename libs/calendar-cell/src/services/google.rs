// libs/calendar-cell/src/services/google.rs
use chrono::{Duration, NaiveDate};
use serde_json::Value;
use tracing::{debug, info, warn};

use shared_api::ApiClient;
use shared_utils::time::format_date_local;

use crate::models::{AuthUrlResponse, CalendarError, CalendarStatus, ImportEventsRequest, ImportEventsResult};

/// Google Calendar link for the signed-in doctor, proxied by the clinic API.
/// OAuth itself happens in the browser; this client only starts and inspects it.
pub struct GoogleCalendarService {
    client: ApiClient,
}

impl GoogleCalendarService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// GET /google-calendar/oauth/status
    pub async fn get_status(&self) -> Result<CalendarStatus, CalendarError> {
        debug!("Checking Google Calendar connection");

        let status: CalendarStatus = self.client.get("/google-calendar/oauth/status", &[]).await?;
        Ok(status)
    }

    /// GET /google-calendar/oauth/auth-url
    pub async fn get_auth_url(&self) -> Result<String, CalendarError> {
        let response: AuthUrlResponse = self.client.get("/google-calendar/oauth/auth-url", &[]).await?;
        Ok(response.auth_url)
    }

    /// POST /google-calendar/oauth/disconnect
    pub async fn disconnect(&self) -> Result<(), CalendarError> {
        let _: Value = self
            .client
            .post("/google-calendar/oauth/disconnect", Value::Object(Default::default()))
            .await?;

        info!("Google Calendar disconnected");
        Ok(())
    }

    /// POST /google-calendar/import/events with local calendar dates.
    pub async fn import_events(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ImportEventsResult, CalendarError> {
        if end < start {
            return Err(CalendarError::InvalidRange { start, end });
        }

        let request = ImportEventsRequest {
            start_date: format_date_local(start),
            end_date: format_date_local(end),
        };
        debug!("Importing calendar events {} to {}", request.start_date, request.end_date);

        let body = ApiClient::to_body(&request)?;
        let result: ImportEventsResult = self.client.post("/google-calendar/import/events", body).await?;

        info!("{}", result.summary());
        Ok(result)
    }

    /// Imports `[today, today + days]` after checking the connection.
    pub async fn import_upcoming(&self, today: NaiveDate, days: i64) -> Result<ImportEventsResult, CalendarError> {
        let status = self.get_status().await?;
        if !status.connected {
            warn!("Import requested without a connected calendar");
            return Err(CalendarError::NotConnected);
        }

        self.import_events(today, today + Duration::days(days)).await
    }
}
