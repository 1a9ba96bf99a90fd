//! Integration tests for the HTTP save/load endpoints
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use savebox::http::create_router;
use savebox::http::handlers::AppState;
use savebox::{SaveStore, StoreConfig};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

async fn test_app(dir: &TempDir) -> Router {
    let store = SaveStore::new(StoreConfig {
        save_dir: dir.path().to_path_buf(),
    })
    .await
    .unwrap();
    create_router(AppState::new(Arc::new(store)))
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/game/save?user=alice",
            json!({"level": 3}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"OK");

    let response = app
        .oneshot(empty_request(Method::GET, "/api/game/load?user=alice"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"level": 3}));
}

#[tokio::test]
async fn load_for_unknown_user_returns_null() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let response = app
        .oneshot(empty_request(Method::GET, "/api/game/load?user=ghost"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, Value::Null);
}

#[tokio::test]
async fn save_without_user_is_bad_request() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/game/save", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // An identifier with no valid characters sanitizes to the empty key and
    // is rejected the same way
    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/game/save?user=%2E%2E%2F%2E%2E",
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn save_without_body_stores_empty_object() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let response = app
        .clone()
        .oneshot(empty_request(Method::POST, "/api/game/save?user=fresh"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(empty_request(Method::GET, "/api/game/load?user=fresh"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, json!({}));
}

#[tokio::test]
async fn user_identifier_is_sanitized_before_hitting_disk() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    // "a/../b" sanitizes to "ab"; no traversal outside the save directory
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/game/save?user=a%2F..%2Fb",
            json!({"x": 1}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(dir.path().join("ab.json").exists());

    let response = app
        .oneshot(empty_request(Method::GET, "/api/game/load?user=ab"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, json!({"x": 1}));
}

#[tokio::test]
async fn rawsave_get_returns_document_or_404() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let response = app
        .clone()
        .oneshot(empty_request(Method::GET, "/api/game/rawsave?user=ghost"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Save file not found"})
    );

    app.clone()
        .oneshot(json_request(
            Method::POST,
            "/api/game/save?user=bob",
            json!({"hp": 10}),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(empty_request(Method::GET, "/api/game/rawsave?user=bob"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"hp": 10}));
}

#[tokio::test]
async fn rawsave_put_rejects_non_object_body() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/api/game/rawsave?user=bob",
            json!("not-an-object"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Missing or invalid data"})
    );

    // Missing body is rejected the same way
    let response = app
        .oneshot(empty_request(Method::PUT, "/api/game/rawsave?user=bob"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rawsave_put_writes_and_acknowledges() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/api/game/rawsave?user=bob",
            json!({"hp": 99}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["ok"], json!(true));
    assert!(body["message"].is_string());

    let response = app
        .oneshot(empty_request(Method::GET, "/api/game/load?user=bob"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, json!({"hp": 99}));
}

#[tokio::test]
async fn rawsave_delete_removes_document() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    app.clone()
        .oneshot(json_request(
            Method::POST,
            "/api/game/save?user=alice",
            json!({"level": 1}),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(empty_request(Method::DELETE, "/api/game/rawsave?user=alice"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["ok"], json!(true));

    let response = app
        .oneshot(empty_request(Method::GET, "/api/game/load?user=alice"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, Value::Null);
}

#[tokio::test]
async fn rawsave_delete_for_unknown_user_is_404() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let response = app
        .oneshot(empty_request(Method::DELETE, "/api/game/rawsave?user=ghost"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Save file not found"})
    );
}

#[tokio::test]
async fn list_returns_saved_user_keys() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    for user in ["a", "b"] {
        app.clone()
            .oneshot(json_request(
                Method::POST,
                &format!("/api/game/save?user={}", user),
                json!({}),
            ))
            .await
            .unwrap();
    }

    let response = app
        .oneshot(empty_request(Method::GET, "/api/game/list"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let mut keys: Vec<String> = serde_json::from_value(body_json(response).await).unwrap();
    keys.sort();
    assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
}

#[tokio::test]
async fn files_lists_metadata_for_directory_contents() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    app.clone()
        .oneshot(json_request(
            Method::POST,
            "/api/game/save?user=alice",
            json!({"level": 3}),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(empty_request(Method::GET, "/api/game/files"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let files = body_json(response).await;
    let files = files.as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["name"], json!("alice.json"));
    assert!(files[0]["size"].as_u64().unwrap() > 0);
    assert!(files[0]["mtime"].is_string());
}

#[tokio::test]
async fn disk_info_reports_directory_state() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let response = app
        .oneshot(empty_request(Method::GET, "/api/game/disk-info"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["exists"], json!(true));
    assert_eq!(body["isDir"], json!(true));
    assert_eq!(body["saveDir"], json!(dir.path().display().to_string()));
}

#[tokio::test]
async fn ping_reports_ok() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let response = app
        .oneshot(empty_request(Method::GET, "/api/ping"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "ok"}));
}
