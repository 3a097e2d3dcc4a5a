//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use codetrack_api::AppState;
use codetrack_core::config::AppConfig;
use codetrack_database::MemorySnapshotStore;
use codetrack_database::store::SnapshotStore;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The in-memory store behind the router, for direct inspection
    pub store: MemorySnapshotStore,
}

impl TestApp {
    /// Create a test application backed by a fresh in-memory store
    pub fn new() -> Self {
        let store = MemorySnapshotStore::new();
        let router = build_router(Arc::new(store.clone()));
        Self { router, store }
    }

    /// Make a JSON request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        api_key: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.request_raw(method, path, &body_str, api_key).await
    }

    /// Make a request with a raw body string
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body: &str,
        api_key: Option<&str>,
    ) -> TestResponse {
        send(&self.router, method, path, body, api_key).await
    }

    /// POST a snapshot for `api_key`
    pub async fn create(
        &self,
        api_key: &str,
        file_name: &str,
        content: &str,
        timestamp: &str,
    ) -> TestResponse {
        self.request(
            "POST",
            "/api/v1/files",
            Some(snapshot_body(file_name, content, timestamp)),
            Some(api_key),
        )
        .await
    }
}

/// Build the full application router around `store`
pub fn build_router(store: Arc<dyn SnapshotStore>) -> Router {
    build_router_with(AppConfig::default(), store)
}

/// Build the full application router with a custom configuration
pub fn build_router_with(config: AppConfig, store: Arc<dyn SnapshotStore>) -> Router {
    codetrack_api::build_app(AppState::new(config, store))
}

/// Send a request through `router`
pub async fn send(
    router: &Router,
    method: &str,
    path: &str,
    body: &str,
    api_key: Option<&str>,
) -> TestResponse {
    let mut req = Request::builder()
        .method(method)
        .uri(path)
        .header("Content-Type", "application/json");

    if let Some(key) = api_key {
        req = req.header("x-api-key", key);
    }

    let req = req
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");

    let response = router
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("Failed to read body");

    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    TestResponse { status, body }
}

/// Snapshot request body with a path derived from the file name
pub fn snapshot_body(file_name: &str, content: &str, timestamp: &str) -> Value {
    serde_json::json!({
        "fileName": file_name,
        "filePath": format!("/tmp/{file_name}"),
        "fullContent": content,
        "timestamp": timestamp,
    })
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// `data.id` of a single-snapshot response
    pub fn id(&self) -> i64 {
        self.body["data"]["id"].as_i64().expect("data.id")
    }
}
