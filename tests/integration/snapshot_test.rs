//! Integration tests for snapshot create and list.

mod helpers;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::json;

use codetrack_core::config::AppConfig;
use codetrack_core::error::AppError;
use codetrack_core::result::AppResult;
use codetrack_database::MemorySnapshotStore;
use codetrack_database::store::{SnapshotStore, SnapshotTransaction};
use codetrack_entity::snapshot::Snapshot;

#[tokio::test]
async fn test_create_compresses_content() {
    let app = helpers::TestApp::new();

    let response = app
        .create("K1", "a.py", "x   y\n\nz", "2024-03-10T12:00:00")
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "File snapshot created");

    let data = &response.body["data"];
    assert_eq!(data["fileName"], "a.py");
    assert_eq!(data["filePath"], "/tmp/a.py");
    assert_eq!(data["fullContent"], "x y z");
    assert_eq!(data["timestamp"], "2024-03-10T12:00:00");
    assert!(data["created_at"].is_string());
    assert!(data.get("key").is_none());
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_identical_repeat_is_already_stored() {
    let app = helpers::TestApp::new();

    let first = app.create("K1", "a.py", "x   y\n\nz", "2024-03-10T12:00:00").await;
    let second = app.create("K1", "a.py", "x   y\n\nz", "2024-03-10T12:00:00").await;

    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.body["message"], "File snapshot already stored");
    assert_eq!(second.id(), first.id());
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_four_seconds_apart_is_duplicate() {
    let app = helpers::TestApp::new();

    let first = app.create("K1", "a.py", "print(1)", "2024-03-10T12:00:00").await;
    let second = app.create("K1", "a.py", "print(2)", "2024-03-10T12:00:04").await;

    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.id(), first.id());
    assert_eq!(second.body["data"]["fullContent"], "print(1)");
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_six_seconds_apart_both_persist() {
    let app = helpers::TestApp::new();

    let first = app.create("K1", "a.py", "print(1)", "2024-03-10T12:00:00").await;
    let second = app.create("K1", "a.py", "print(1)", "2024-03-10T12:00:06").await;

    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(second.status, StatusCode::CREATED);
    assert_ne!(second.id(), first.id());
    assert_eq!(app.store.len().await, 2);
}

#[tokio::test]
async fn test_offset_timestamp_is_stored_as_naive_utc() {
    let app = helpers::TestApp::new();

    let response = app
        .create("K1", "a.py", "x", "2024-03-10T14:00:00+02:00")
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["timestamp"], "2024-03-10T12:00:00");

    let repeat = app.create("K1", "a.py", "x", "2024-03-10T12:00:02Z").await;
    assert_eq!(repeat.status, StatusCode::OK);
}

#[tokio::test]
async fn test_epoch_milliseconds_timestamp() {
    let app = helpers::TestApp::new();

    let body = json!({
        "fileName": "a.py",
        "filePath": "/tmp/a.py",
        "fullContent": "x",
        "timestamp": 1_710_072_000_000_i64,
    });
    let response = app.request("POST", "/api/v1/files", Some(body), Some("K1")).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["timestamp"], "2024-03-10T12:00:00");

    let repeat = app.create("K1", "a.py", "x", "2024-03-10T12:00:03").await;
    assert_eq!(repeat.status, StatusCode::OK);
    assert_eq!(repeat.id(), response.id());
}

#[tokio::test]
async fn test_epoch_seconds_timestamp() {
    let app = helpers::TestApp::new();

    let body = json!({
        "fileName": "a.py",
        "filePath": "/tmp/a.py",
        "fullContent": "x",
        "timestamp": 1_710_072_000_i64,
    });
    let response = app.request("POST", "/api/v1/files", Some(body), Some("K1")).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["timestamp"], "2024-03-10T12:00:00");
}

#[tokio::test]
async fn test_list_only_own_key_newest_first() {
    let app = helpers::TestApp::new();

    app.create("K1", "a.py", "a", "2024-03-10T12:00:00").await;
    app.create("K2", "b.py", "b", "2024-03-10T12:00:00").await;
    app.create("K1", "c.py", "c", "2024-01-01T00:00:00").await;

    let response = app.request("GET", "/api/v1/files", None, Some("K1")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "2 file snapshots found");
    let names: Vec<&str> = response.body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|s| s["fileName"].as_str().expect("fileName"))
        .collect();
    assert_eq!(names, vec!["c.py", "a.py"]);
}

#[tokio::test]
async fn test_list_empty_for_unknown_key() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/v1/files", None, Some("nobody")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "0 file snapshots found");
    assert_eq!(response.body["data"], json!([]));
}

#[tokio::test]
async fn test_list_without_key_is_unauthorized() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/v1/files", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["detail"], "Missing x-api-key header");
}

#[tokio::test]
async fn test_create_without_key_writes_nothing() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/files",
            Some(helpers::snapshot_body("a.py", "x", "2024-03-10T12:00:00")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_create_with_empty_key_is_unauthorized() {
    let app = helpers::TestApp::new();

    let response = app.create("", "a.py", "x", "2024-03-10T12:00:00").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_overlong_key_is_unauthorized() {
    let app = helpers::TestApp::new();
    let key = "k".repeat(256);

    let response = app.create(&key, "a.py", "x", "2024-03-10T12:00:00").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["detail"], "x-api-key header exceeds 255 characters");
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_missing_field_is_unprocessable() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/files",
            Some(json!({
                "fileName": "a.py",
                "filePath": "/tmp/a.py",
                "timestamp": "2024-03-10T12:00:00",
            })),
            Some("K1"),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body["detail"].is_string());
}

#[tokio::test]
async fn test_malformed_json_is_unprocessable() {
    let app = helpers::TestApp::new();

    let response = app
        .request_raw("POST", "/api/v1/files", "{not json", Some("K1"))
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_bad_timestamp_is_unprocessable() {
    let app = helpers::TestApp::new();

    let response = app.create("K1", "a.py", "x", "last tuesday").await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_overlong_path_is_unprocessable() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/files",
            Some(json!({
                "fileName": "a.py",
                "filePath": "/".repeat(1025),
                "fullContent": "x",
                "timestamp": "2024-03-10T12:00:00",
            })),
            Some("K1"),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_nul_in_content_is_unprocessable() {
    let app = helpers::TestApp::new();

    let response = app.create("K1", "a.py", "a\u{0}b", "2024-03-10T12:00:00").await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_oversized_body_is_payload_too_large() {
    let mut config = AppConfig::default();
    config.server.max_body_bytes = 64;
    let store = MemorySnapshotStore::new();
    let router = helpers::build_router_with(config, Arc::new(store.clone()));
    let body = helpers::snapshot_body("a.py", &"x".repeat(200), "2024-03-10T12:00:00").to_string();

    let response = helpers::send(&router, "POST", "/api/v1/files", &body, Some("K1")).await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(response.body["detail"].is_string());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/v1/nope", None, Some("K1")).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["detail"], "Not Found");
}

/// Store that is unreachable for every operation.
#[derive(Debug)]
struct UnreachableStore;

#[async_trait]
impl SnapshotStore for UnreachableStore {
    async fn begin(&self) -> AppResult<Box<dyn SnapshotTransaction>> {
        Err(AppError::database("Failed to begin transaction: connection refused"))
    }

    async fn list_by_key(&self, _key: &str) -> AppResult<Vec<Snapshot>> {
        Err(AppError::database("Failed to list snapshots: connection refused"))
    }

    async fn ping(&self) -> AppResult<()> {
        Err(AppError::database("Health check failed: connection refused"))
    }
}

#[tokio::test]
async fn test_store_failure_on_create_is_server_error() {
    let router = helpers::build_router(Arc::new(UnreachableStore));
    let body = helpers::snapshot_body("a.py", "x", "2024-03-10T12:00:00").to_string();

    let response = helpers::send(&router, "POST", "/api/v1/files", &body, Some("K1")).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body["detail"],
        "Failed to save file: Failed to begin transaction: connection refused"
    );
}

#[tokio::test]
async fn test_store_failure_on_list_is_server_error() {
    let router = helpers::build_router(Arc::new(UnreachableStore));

    let response = helpers::send(&router, "GET", "/api/v1/files", "", Some("K1")).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        response.body["detail"]
            .as_str()
            .expect("detail")
            .starts_with("Failed to list files: ")
    );
}
