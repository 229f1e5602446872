//! Integration tests for CalDAV client using WireMock
//!
//! These tests mock CalDAV server responses to PUT requests to verify
//! client behavior without requiring an actual CalDAV server.

use chrono::{TimeZone, Utc};
use icalendar::{CalendarComponent, Component, parser};
use integration_caldav::{
    CalDavClient, CalDavConfig, CalDavError, CalendarEvent, HttpCalDavClient,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, header_exists, method, path, path_regex},
};

// =============================================================================
// Test Helpers
// =============================================================================

fn test_config(base_url: &str) -> CalDavConfig {
    CalDavConfig {
        server_url: base_url.to_string(),
        username: "test_user".to_string(),
        password: "test_pass".to_string(),
        calendar_path: Some("/calendars/main".to_string()),
        verify_certs: true,
        timeout_secs: 30,
    }
}

fn test_event() -> CalendarEvent {
    CalendarEvent {
        uid: "event-12345".to_string(),
        summary: "🚌 Bus 48 to School".to_string(),
        description: Some(
            "Bus 48 to Bevendean\nFrom: Saunders Park View\nDeparture: 08:22".to_string(),
        ),
        start: Utc.with_ymd_and_hms(2026, 1, 12, 8, 22, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2026, 1, 12, 8, 27, 0).unwrap(),
        alarm_minutes_before: 12,
    }
}

fn client_for(server: &MockServer) -> HttpCalDavClient {
    HttpCalDavClient::new(test_config(&server.uri())).unwrap()
}

// =============================================================================
// create_event
// =============================================================================

#[tokio::test]
async fn test_create_event_success() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/calendars/main/event-12345.ics"))
        .and(header("Content-Type", "text/calendar; charset=utf-8"))
        .and(header_exists("Authorization"))
        .and(body_string_contains("BEGIN:VEVENT"))
        .and(body_string_contains("BEGIN:VALARM"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let url = client_for(&server)
        .create_event("/calendars/main", &test_event())
        .await
        .unwrap();

    assert_eq!(url, format!("{}/calendars/main/event-12345.ics", server.uri()));
}

#[tokio::test]
async fn test_create_event_no_content_is_success() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path_regex(r"^/calendars/main/.+\.ics$"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    assert!(
        client_for(&server)
            .create_event("/calendars/main", &test_event())
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_create_event_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .create_event("/calendars/main", &test_event())
        .await;

    assert!(matches!(result, Err(CalDavError::AuthenticationFailed)));
}

#[tokio::test]
async fn test_create_event_calendar_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .create_event("/calendars/missing", &test_event())
        .await;

    match result {
        Err(CalDavError::CalendarNotFound(calendar)) => assert_eq!(calendar, "/calendars/missing"),
        other => panic!("expected CalendarNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_event_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(507))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .create_event("/calendars/main", &test_event())
        .await;

    assert!(matches!(result, Err(CalDavError::RequestFailed(_))));
}

#[tokio::test]
async fn test_create_event_connection_refused() {
    let config = test_config("http://127.0.0.1:1");
    let client = HttpCalDavClient::new(config).unwrap();

    let result = client.create_event("/calendars/main", &test_event()).await;

    assert!(matches!(result, Err(CalDavError::ConnectionFailed(_))));
}

// =============================================================================
// Request body
// =============================================================================

#[tokio::test]
async fn test_request_body_is_valid_icalendar() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    client_for(&server)
        .create_event("/calendars/main", &test_event())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8(requests[0].body.clone()).unwrap();

    let unfolded = parser::unfold(&body);
    let parsed = parser::read_calendar(&unfolded).unwrap();
    let events: Vec<_> = parsed
        .components
        .into_iter()
        .filter_map(|c| match CalendarComponent::from(c) {
            CalendarComponent::Event(event) => Some(event),
            _ => None,
        })
        .collect();

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.get_summary(), Some("🚌 Bus 48 to School"));
    assert_eq!(event.property_value("UID"), Some("event-12345"));
    assert_eq!(event.property_value("DTSTART"), Some("20260112T082200Z"));
    assert_eq!(event.property_value("DTEND"), Some("20260112T082700Z"));
}

#[tokio::test]
async fn test_long_description_is_folded() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let mut event = test_event();
    event.description = Some("⏰ Leave now to catch the bus! ".repeat(6));

    client_for(&server)
        .create_event("/calendars/main", &event)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8(requests[0].body.clone()).unwrap();

    for line in body.split("\r\n") {
        assert!(line.len() <= 75, "line too long: {line}");
    }
    assert!(body.contains("\r\n "));
}
