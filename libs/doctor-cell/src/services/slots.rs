use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use shared_api::ApiClient;
use shared_models::AppError;
use shared_utils::time::format_date_local;

use crate::models::DaySlots;

/// Source of the "day → slots" data behind the slot browser.
#[async_trait]
pub trait SlotApi: Send + Sync {
    async fn get_doctor_slots(&self, doctor_id: String, date: NaiveDate) -> Result<DaySlots, AppError>;
}

pub struct HttpSlotApi {
    client: ApiClient,
}

impl HttpSlotApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SlotApi for HttpSlotApi {
    /// GET /appointments/doctor/{doctorId}/slots?date=YYYY-MM-DD
    async fn get_doctor_slots(&self, doctor_id: String, date: NaiveDate) -> Result<DaySlots, AppError> {
        let date_key = format_date_local(date);
        debug!("Fetching slots for doctor {} on {}", doctor_id, date_key);

        let path = format!("/appointments/doctor/{}/slots", doctor_id);
        self.client.get(&path, &[("date", date_key)]).await
    }
}
