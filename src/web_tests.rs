#![cfg(test)]

use super::web::*;
use crate::clock::FixedClock;
use crate::config::{DisplayConfig, Language};
use crate::tariff::TariffClassifier;
use axum::http::{Request, StatusCode, header};
use chrono::{NaiveDate, NaiveDateTime};
use http_body_util::BodyExt;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn state_at(now: NaiveDateTime, display: DisplayConfig) -> AppState {
    AppState::new(
        TariffClassifier::default(),
        Arc::new(FixedClock::new(now)),
        display,
    )
}

fn test_state() -> AppState {
    // Monday in high season
    state_at(at(2024, 1, 15, 8, 0), DisplayConfig::default())
}

async fn get(state: AppState, uri: &str) -> axum::response::Response {
    build_router(state)
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn health_ok() {
    let response = get(test_state(), "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn tariff_returns_current_zone() {
    let response = get(test_state(), "/api/tariff").await;
    assert_eq!(response.status(), StatusCode::OK);
    let ct = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"));

    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({
            "zone": 1,
            "label": "Zone 1 (High Season Working Day)",
            "remaining_block_time": "6h:0m",
        })
    );
}

#[tokio::test]
async fn tariff_wraps_past_midnight() {
    // Saturday in high season, after the last boundary
    let state = state_at(at(2024, 12, 21, 23, 0), DisplayConfig::default());
    let json = body_json(get(state, "/api/tariff").await).await;
    assert_eq!(json["zone"], 4);
    assert_eq!(json["remaining_block_time"], "7h:0m");
}

#[tokio::test]
async fn tariff_low_season_weekend_night() {
    let state = state_at(at(2024, 7, 6, 5, 45), DisplayConfig::default());
    let json = body_json(get(state, "/api/tariff").await).await;
    assert_eq!(json["zone"], 5);
    assert_eq!(json["label"], "Zone 5 (Low Season Non-Working Day)");
    assert_eq!(json["remaining_block_time"], "0h:15m");
}

#[tokio::test]
async fn schedule_describes_the_whole_day() {
    let response = get(test_state(), "/api/schedule").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["season"], "high");
    assert_eq!(json["day_kind"], "working");
    assert_eq!(json["minute_of_day"], 480);
    assert_eq!(json["boundaries"], serde_json::json!([6, 7, 14, 16, 20, 22]));
    assert_eq!(json["policy"]["name"], "five-zone");
    assert_eq!(json["policy"]["version"], 2);

    let hours = json["hours"].as_array().unwrap();
    assert_eq!(hours.len(), 24);
    assert_eq!(hours[0], 3);
    assert_eq!(hours[8], 1);
    assert_eq!(hours[15], 2);
    assert_eq!(hours[23], 3);
    // the hand and the centre agree on the zone
    assert_eq!(hours[8], json["tariff"]["zone"]);
}

#[tokio::test]
async fn version_reports_build_and_policy() {
    let json = body_json(get(test_state(), "/api/version").await).await;
    assert_eq!(json["version"], crate::APP_VERSION);
    assert_eq!(json["policy"]["name"], "five-zone");
    assert_eq!(json["policy"]["version"], 2);
}

#[tokio::test]
async fn index_renders_page() {
    let response = get(test_state(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let ct = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("text/html"));

    let html = body_text(response).await;
    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.contains("\"#0D47A1\""));
    assert!(html.contains("\"events_url\":\"/api/events\""));
}

#[tokio::test]
async fn index_follows_configured_language() {
    let display = DisplayConfig {
        language: Language::Sl,
        ..DisplayConfig::default()
    };
    let html = body_text(get(state_at(at(2024, 1, 15, 8, 0), display), "/").await).await;
    assert!(html.contains("<html lang=\"sl\">"));
    assert!(html.contains("Delovni dan"));
}

#[tokio::test]
async fn responses_are_not_cached() {
    for uri in ["/", "/api/tariff", "/api/schedule"] {
        let response = get(test_state(), uri).await;
        let cache = response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("");
        assert_eq!(cache, "no-store", "{uri}");
    }
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = get(test_state(), "/api/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn events_stream_sends_schedule_immediately() {
    let response = get(test_state(), "/api/events").await;
    assert_eq!(response.status(), StatusCode::OK);
    let ct = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");
    assert!(ct.contains("text/event-stream"));

    let mut body = response.into_body();
    let mut buf: Vec<u8> = Vec::new();
    let wait = tokio::time::timeout(Duration::from_secs(2), async {
        while let Some(Ok(frame)) = body.frame().await {
            if let Some(data) = frame.data_ref() {
                buf.extend_from_slice(data);
                if buf.windows(2).any(|w| w == b"\n\n") {
                    break;
                }
            }
        }
    })
    .await;

    assert!(wait.is_ok(), "timed out waiting for the first tariff event");
    let s = String::from_utf8_lossy(&buf);
    assert!(s.contains(&format!("event: {TARIFF_EVENT}")), "{s}");
    let data = s
        .lines()
        .find_map(|line| line.strip_prefix("data: "))
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(data).unwrap();
    assert_eq!(json["tariff"]["zone"], 1);
    assert_eq!(json["tariff"]["remaining_block_time"], "6h:0m");
}

#[test]
fn state_uses_injected_clock() {
    let state = state_at(at(2024, 7, 8, 14, 1), DisplayConfig::default());
    let result = state.tariff_now();
    assert_eq!(result.zone.number(), 3);
    assert_eq!(result.remaining_block_time.to_string(), "1h:59m");
    assert_eq!(state.day_schedule_now().tariff, result);
}
