// libs/doctor-cell/src/services/slot_browser.rs
use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, error};

use shared_utils::time::format_date_local;

use crate::models::{DoctorError, Slot};
use crate::services::day_tabs::{generate_day_tabs, DayTab};
use crate::services::slot_display::{SlotCard, SlotDetail};
use crate::services::slots::SlotApi;

/// Per-day slot grid for one doctor.
///
/// Fetched days are cached by their `YYYY-MM-DD` key for the lifetime of the
/// browser; revisiting a day reads the cache and only `refresh` refetches.
pub struct SlotBrowser {
    api: Arc<dyn SlotApi>,
    doctor_id: String,
    tabs: Vec<DayTab>,
    selected_date: NaiveDate,
    cache: HashMap<String, Vec<Slot>>,
    loading: bool,
    error: Option<String>,
    detail: Option<SlotDetail>,
}

impl SlotBrowser {
    pub fn new(api: Arc<dyn SlotApi>, doctor_id: &str, today: NaiveDate, days_ahead: u32) -> Self {
        Self {
            api,
            doctor_id: doctor_id.to_string(),
            tabs: generate_day_tabs(today, days_ahead),
            selected_date: today,
            cache: HashMap::new(),
            loading: false,
            error: None,
            detail: None,
        }
    }

    pub fn tabs(&self) -> &[DayTab] {
        &self.tabs
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_cached(&self, date: NaiveDate) -> bool {
        self.cache.contains_key(&format_date_local(date))
    }

    /// Slots of the selected day, `None` until that day has been fetched.
    pub fn slots(&self) -> Option<&[Slot]> {
        self.cache
            .get(&format_date_local(self.selected_date))
            .map(|slots| slots.as_slice())
    }

    pub fn cards(&self) -> Vec<SlotCard> {
        self.slots()
            .map(|slots| slots.iter().map(SlotCard::from).collect())
            .unwrap_or_default()
    }

    /// Loaded and empty: the "no slots for this day" state, not an error.
    pub fn is_empty_day(&self) -> bool {
        !self.loading && self.slots().map(|s| s.is_empty()).unwrap_or(false)
    }

    pub async fn select_day(&mut self, date: NaiveDate) -> Result<(), DoctorError> {
        if !self.tabs.iter().any(|tab| tab.date == date) {
            return Err(DoctorError::DateOutOfRange(date));
        }

        self.selected_date = date;
        self.detail = None;
        self.error = None;

        if self.is_cached(date) {
            debug!("Slots for {} served from cache", format_date_local(date));
            return Ok(());
        }

        self.fetch(date).await
    }

    /// Explicit refresh of the selected day, bypassing the cache.
    pub async fn refresh(&mut self) -> Result<(), DoctorError> {
        let date = self.selected_date;
        self.fetch(date).await
    }

    async fn fetch(&mut self, date: NaiveDate) -> Result<(), DoctorError> {
        self.loading = true;
        self.error = None;

        let result = self.api.get_doctor_slots(self.doctor_id.clone(), date).await;
        self.loading = false;

        match result {
            Ok(day) => {
                debug!("Loaded {} slots for {}", day.slots.len(), format_date_local(date));
                self.cache.insert(format_date_local(date), day.slots);
                Ok(())
            }
            Err(e) => {
                error!("Failed to load slots for {}: {}", format_date_local(date), e);
                self.error = Some(e.toast_message());
                Err(DoctorError::Api(e))
            }
        }
    }

    /// Opens the read-only detail view for a slot of the selected day.
    pub fn open_slot(&mut self, slot_id: &str) -> Option<&SlotDetail> {
        let detail = self
            .slots()
            .and_then(|slots| slots.iter().find(|s| s.id == slot_id))
            .map(SlotDetail::from);

        self.detail = detail;
        self.detail.as_ref()
    }

    pub fn detail(&self) -> Option<&SlotDetail> {
        self.detail.as_ref()
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }
}
