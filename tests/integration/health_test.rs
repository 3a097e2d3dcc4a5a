//! Integration tests for health endpoints.

mod helpers;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use chrono::NaiveDateTime;

use codetrack_core::error::AppError;
use codetrack_core::result::AppResult;
use codetrack_database::store::{SnapshotStore, SnapshotTransaction};
use codetrack_entity::snapshot::Snapshot;

#[tokio::test]
async fn test_health_needs_no_key() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/v1/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    let ts = response.body["timestamp"].as_str().expect("timestamp");
    assert!(NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
}

#[tokio::test]
async fn test_detailed_health_with_store() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/v1/health/detailed", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["database"], "connected");
}

#[derive(Debug)]
struct DownStore;

#[async_trait]
impl SnapshotStore for DownStore {
    async fn begin(&self) -> AppResult<Box<dyn SnapshotTransaction>> {
        Err(AppError::database("down"))
    }

    async fn list_by_key(&self, _key: &str) -> AppResult<Vec<Snapshot>> {
        Err(AppError::database("down"))
    }

    async fn ping(&self) -> AppResult<()> {
        Err(AppError::database("down"))
    }
}

#[tokio::test]
async fn test_detailed_health_reports_degraded_store() {
    let router = helpers::build_router(Arc::new(DownStore));

    let response = helpers::send(&router, "GET", "/api/v1/health/detailed", "", None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["status"], "degraded");
    assert_eq!(response.body["database"], "unavailable");
}
