//! Health check handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;

use crate::dto::response::{DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/v1/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().naive_utc(),
    })
}

/// GET /api/v1/health/detailed
pub async fn health_detailed(
    State(state): State<AppState>,
) -> (StatusCode, Json<DetailedHealthResponse>) {
    let timestamp = Utc::now().naive_utc();

    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(DetailedHealthResponse {
                status: "ok".to_string(),
                timestamp,
                database: "connected".to_string(),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Store health probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(DetailedHealthResponse {
                    status: "degraded".to_string(),
                    timestamp,
                    database: "unavailable".to_string(),
                }),
            )
        }
    }
}
