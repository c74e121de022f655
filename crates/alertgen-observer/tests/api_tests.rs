//! Integration tests for the alert query API endpoints.
//!
//! Most tests drive Axum's `Router` directly via `tower::ServiceExt`
//! without starting a TCP server. The last two bind real sockets to check
//! the background startup helper.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use alertgen_core::{AlertStore, generate_with_clock};
use alertgen_observer::error::NOT_FOUND_MESSAGE;
use alertgen_observer::router::build_router;
use alertgen_observer::state::AppState;
use alertgen_observer::{ServerConfig, StartupError, spawn_observer};
use alertgen_types::{Alert, AlertId};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tower::ServiceExt;

fn make_test_state() -> Arc<AppState> {
    let now = Utc.with_ymd_and_hms(2026, 4, 10, 15, 0, 0).unwrap();
    let store = generate_with_clock(200, now, &mut StdRng::seed_from_u64(2024));
    Arc::new(AppState::new(Arc::new(store)))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(state: Arc<AppState>, path: &str) -> (StatusCode, Value) {
    let response = build_router(state)
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_list_alerts_returns_every_alert_keyed_by_id() {
    let state = make_test_state();
    let (status, json) = get(Arc::clone(&state), "/api/alerts").await;

    assert_eq!(status, StatusCode::OK);
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 200);
    for alert in state.store.iter() {
        let entry = object.get(&alert.id.to_string()).unwrap();
        assert_eq!(entry["alert_id"], alert.id.to_string());
    }
}

#[tokio::test]
async fn test_list_alerts_uses_null_for_unresolved_fields() {
    let state = make_test_state();
    let (_, json) = get(Arc::clone(&state), "/api/alerts").await;

    let open = state.store.iter().find(|a| !a.is_resolved()).unwrap();
    let entry = &json[&open.id.to_string()];
    assert!(entry["resolutation_datetime"].is_null());
    assert!(entry["conclusion"].is_null());

    let done = state.store.iter().find(|a| a.is_resolved()).unwrap();
    let entry = &json[&done.id.to_string()];
    assert_eq!(entry["status"], "Completed");
    assert!(entry["resolutation_datetime"].is_string());
    assert!(entry["conclusion"].is_string());
}

#[tokio::test]
async fn test_get_alert_returns_exact_record() {
    let state = make_test_state();

    for alert in state.store.iter().take(10) {
        let path = format!("/api/alerts/{}", alert.id);
        let (status, json) = get(Arc::clone(&state), &path).await;

        assert_eq!(status, StatusCode::OK);
        let decoded: Alert = serde_json::from_value(json).unwrap();
        assert_eq!(&decoded, alert);
    }
}

#[tokio::test]
async fn test_get_alert_not_found() {
    let state = make_test_state();

    let fresh = AlertId::new();
    assert!(!state.store.contains(&fresh));

    let (status, json) = get(state, &format!("/api/alerts/{fresh}")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({ "erro": "Alerta não encontrado" }));
}

#[tokio::test]
async fn test_get_alert_with_non_uuid_is_not_found() {
    let state = make_test_state();
    let (status, json) = get(state, "/api/alerts/not-a-uuid").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["erro"], NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn test_empty_store_lists_empty_object() {
    let state = Arc::new(AppState::new(Arc::new(AlertStore::new())));
    let (status, json) = get(state, "/api/alerts").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({}));
}

#[tokio::test]
async fn test_write_methods_are_rejected() {
    let state = make_test_state();
    let response = build_router(state)
        .oneshot(Request::post("/api/alerts").body(Body::from("{}")).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let state = make_test_state();
    let response = build_router(state)
        .oneshot(Request::get("/api/other").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_spawned_server_answers_over_tcp() {
    let state = make_test_state();
    let known = state.store.iter().next().unwrap().id;
    let config = ServerConfig {
        host: String::from("127.0.0.1"),
        port: 0,
    };

    let running = spawn_observer(&config, state).await.unwrap();
    assert_ne!(running.local_addr.port(), 0);

    let mut stream = tokio::net::TcpStream::connect(running.local_addr)
        .await
        .unwrap();
    let request = format!(
        "GET /api/alerts/{known} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n"
    );
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut raw = String::new();
    stream.read_to_string(&mut raw).await.unwrap();

    assert!(raw.starts_with("HTTP/1.1 200"), "{raw}");
    assert!(raw.contains(&known.to_string()));

    running.handle.abort();
}

#[tokio::test]
async fn test_spawn_on_taken_port_fails() {
    let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = taken.local_addr().unwrap().port();
    let config = ServerConfig {
        host: String::from("127.0.0.1"),
        port,
    };

    let result = spawn_observer(&config, make_test_state()).await;

    assert!(matches!(result, Err(StartupError::Server(_))));
}
