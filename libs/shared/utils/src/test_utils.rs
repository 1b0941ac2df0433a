use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::{Session, SessionStore};

use crate::time::format_date_local;

pub struct TestConfig {
    pub api_base_url: String,
    pub auth_token: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            auth_token: "test-auth-token".to_string(),
        }
    }
}

impl TestConfig {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig::new(self.api_base_url.clone())
    }
}

pub struct TestSession;

impl TestSession {
    pub fn patient(user_id: &str) -> Arc<dyn SessionStore> {
        Arc::new(Session::patient(user_id, &TestConfig::default().auth_token).with_name("Test Patient"))
    }

    pub fn doctor(user_id: &str) -> Arc<dyn SessionStore> {
        Arc::new(Session::doctor(user_id, &TestConfig::default().auth_token).with_name("Dr. Test"))
    }

    pub fn anonymous() -> Arc<dyn SessionStore> {
        Arc::new(Session::anonymous())
    }
}

pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub struct MockApiResponses;

impl MockApiResponses {
    pub fn success(data: Value) -> Value {
        json!({
            "success": true,
            "data": data
        })
    }

    pub fn failure(message: &str) -> Value {
        json!({
            "success": false,
            "message": message
        })
    }

    pub fn appointment(id: &str, date: NaiveDate, time: &str, status: &str) -> Value {
        json!({
            "_id": id,
            "appointmentDate": format!("{}T00:00:00.000Z", format_date_local(date)),
            "appointmentTime": time,
            "status": status,
            "doctorId": "doctor-1",
            "patientId": "patient-1",
            "serviceId": "service-1",
            "slotId": "slot-1",
            "duration": 30,
            "patientNotes": "",
            "internalNotes": "",
            "medications": {},
            "reportPdfPath": null,
            "googleMeetLink": null
        })
    }

    pub fn pending_appointment(id: &str, date: NaiveDate, time: &str) -> Value {
        json!({
            "_id": id,
            "appointmentDate": format_date_local(date),
            "appointmentTime": time,
            "status": "PENDING",
            "doctorId": null,
            "patientId": "patient-1",
            "serviceId": "service-1",
            "slotId": null,
            "duration": 30
        })
    }

    pub fn slot(id: &str, start: &str, end: &str, status: &str) -> Value {
        json!({
            "_id": id,
            "startTime": start,
            "endTime": end,
            "status": status
        })
    }

    pub fn booked_slot(id: &str, start: &str, end: &str, meet_link: Option<&str>) -> Value {
        json!({
            "_id": id,
            "startTime": start,
            "endTime": end,
            "status": "booked",
            "appointment": {
                "_id": new_id(),
                "patientName": "Aoife Murphy",
                "patientEmail": "aoife@example.com",
                "patientPhone": null,
                "serviceName": "General Consultation",
                "status": "CONFIRMED",
                "patientNotes": "Recurring headaches",
                "googleMeetLink": meet_link
            }
        })
    }

    pub fn working_hours(day_of_week: u8, start: &str, end: &str) -> Value {
        json!({
            "_id": new_id(),
            "dayOfWeek": day_of_week,
            "startTime": start,
            "endTime": end,
            "slotDuration": 30,
            "breakDuration": 0,
            "isActive": true
        })
    }
}
