//! Gateway tests driving the router in-process

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;
use tripdeck_api::{router, AppState, Config};
use tripdeck_storage::{DirStore, DocumentStore, MemoryStore};

fn app_with(store: Arc<dyn DocumentStore>) -> Router {
    router(AppState::new(store))
}

fn seeded() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_objects([
        ("todo.json", r#"{"todo":[{"id":"1","text":"Buy milk","completed":false,"priority":"low"}]}"#),
        ("pin.json", r#"{"type":"FeatureCollection","features":[]}"#),
    ]))
}

async fn send(app: Router, method: &str, uri: &str, body: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let resp = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, headers, bytes.to_vec())
}

#[tokio::test]
async fn test_get_returns_stored_json_verbatim() {
    let store = seeded();
    let stored = store.get("todo.json").unwrap();
    let (status, headers, body) = send(app_with(store), "GET", "/api/todo", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    assert_eq!(body, stored);
}

#[tokio::test]
async fn test_post_overwrites_whole_document() {
    let store = seeded();
    let doc = json!({"todo": []}).to_string();
    let (status, _, body) = send(app_with(store.clone()), "POST", "/api/todo", &doc).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!({"ok": true}));
    assert_eq!(store.get("todo.json").unwrap(), doc.as_bytes());
}

#[tokio::test]
async fn test_post_malformed_body_is_rejected() {
    let store = seeded();
    let before = store.get("todo.json").unwrap();
    let (status, _, body) = send(app_with(store.clone()), "POST", "/api/todo", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "Malformed payload");
    assert!(body["details"].is_string());
    assert_eq!(store.get("todo.json").unwrap(), before);
}

#[tokio::test]
async fn test_missing_document_is_404() {
    let (status, _, body) = send(app_with(seeded()), "GET", "/api/trip", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn test_unknown_document_name_is_404() {
    let (status, _, _) = send(app_with(seeded()), "GET", "/api/passport", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = send(app_with(seeded()), "POST", "/api/passport", "{}").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pins_read_only() {
    let (status, _, body) = send(app_with(seeded()), "GET", "/api/pins", "").await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["features"], json!([]));

    let store = seeded();
    let (status, headers, _) = send(app_with(store.clone()), "POST", "/api/pins", "{}").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(headers[header::ALLOW], "GET");
    assert_ne!(store.get("pin.json").unwrap(), b"{}");
}

#[tokio::test]
async fn test_health() {
    let (status, _, body) = send(app_with(seeded()), "GET", "/health", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn test_open_seeds_directory_bucket() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        data_dir: dir.path().join("bucket"),
        ..Config::default()
    };
    let state = AppState::open(&config).unwrap();

    let (status, _, body) = send(router(state), "GET", "/api/note", "").await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert!(body["content"].is_array());

    let reopened = DirStore::open(dir.path().join("bucket")).unwrap();
    assert!(reopened.contains("trip.json").unwrap());
}
