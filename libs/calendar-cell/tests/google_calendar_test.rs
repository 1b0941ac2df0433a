use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use calendar_cell::models::CalendarError;
use calendar_cell::services::GoogleCalendarService;
use shared_api::ApiClient;
use shared_models::AppError;
use shared_utils::test_utils::{ymd, MockApiResponses, TestConfig, TestSession};

fn service_for(server: &MockServer) -> GoogleCalendarService {
    let config = TestConfig::with_base_url(&server.uri()).to_app_config();
    GoogleCalendarService::new(ApiClient::new(&config, TestSession::doctor("doctor-1")))
}

#[tokio::test]
async fn test_status_and_auth_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/google-calendar/oauth/status"))
        .and(header("authorization", "Bearer test-auth-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockApiResponses::success(json!({
            "connected": true,
            "email": "dr.byrne@example.com"
        }))))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/google-calendar/oauth/auth-url"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockApiResponses::success(json!({
            "authUrl": "https://accounts.google.com/o/oauth2/v2/auth?client_id=abc"
        }))))
        .mount(&server)
        .await;

    let service = service_for(&server);

    let status = service.get_status().await.unwrap();
    assert!(status.connected);
    assert_eq!(status.email.as_deref(), Some("dr.byrne@example.com"));

    let url = service.get_auth_url().await.unwrap();
    assert!(url.starts_with("https://accounts.google.com/"));
}

#[tokio::test]
async fn test_import_sends_local_dates() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/google-calendar/import/events"))
        .and(body_json(json!({ "startDate": "2024-12-30", "endDate": "2025-01-05" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockApiResponses::success(json!({
            "imported": 4,
            "skipped": 1
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let result = service_for(&server)
        .import_events(ymd(2024, 12, 30), ymd(2025, 1, 5))
        .await
        .unwrap();

    assert_eq!(result.imported, 4);
    assert_eq!(result.summary(), "Imported 4 events, skipped 1");
}

#[tokio::test]
async fn test_import_rejects_reversed_range_locally() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/google-calendar/import/events"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = service_for(&server)
        .import_events(ymd(2024, 6, 10), ymd(2024, 6, 1))
        .await;

    assert_matches!(result, Err(CalendarError::InvalidRange { .. }));
}

#[tokio::test]
async fn test_import_upcoming_requires_connection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/google-calendar/oauth/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockApiResponses::success(json!({
            "connected": false
        }))))
        .mount(&server)
        .await;

    let result = service_for(&server).import_upcoming(ymd(2024, 6, 10), 7).await;
    assert_matches!(result, Err(CalendarError::NotConnected));
}

#[tokio::test]
async fn test_disconnect_failure_uses_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/google-calendar/oauth/disconnect"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockApiResponses::failure(
            "No calendar connection found",
        )))
        .mount(&server)
        .await;

    let err = service_for(&server).disconnect().await.unwrap_err();
    assert_matches!(err, CalendarError::Api(AppError::RequestFailed { .. }));
    assert_eq!(err.toast_message(), "No calendar connection found");
}
