//! File snapshot create and list handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::CreateSnapshotRequest;
use crate::dto::response::{ApiResponse, SnapshotResponse};
use crate::error::ApiError;
use crate::extractors::{ApiKey, JsonBody};
use crate::state::AppState;

/// POST /api/v1/files
///
/// 201 when a new snapshot was stored, 200 when a recent equivalent
/// already existed.
pub async fn create_snapshot(
    State(state): State<AppState>,
    ApiKey(ctx): ApiKey,
    JsonBody(req): JsonBody<CreateSnapshotRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SnapshotResponse>>), ApiError> {
    let outcome = state
        .snapshot_service
        .create_snapshot(&ctx, req.into())
        .await?;

    let (status, message) = if outcome.is_new() {
        (StatusCode::CREATED, "File snapshot created")
    } else {
        (StatusCode::OK, "File snapshot already stored")
    };

    Ok((
        status,
        Json(ApiResponse::new(
            message,
            SnapshotResponse::from(outcome.into_snapshot()),
        )),
    ))
}

/// GET /api/v1/files
pub async fn list_snapshots(
    State(state): State<AppState>,
    ApiKey(ctx): ApiKey,
) -> Result<Json<ApiResponse<Vec<SnapshotResponse>>>, ApiError> {
    let rows = state.snapshot_service.list_snapshots(&ctx).await?;
    let data: Vec<SnapshotResponse> = rows.into_iter().map(SnapshotResponse::from).collect();

    Ok(Json(ApiResponse::new(
        format!("{} file snapshots found", data.len()),
        data,
    )))
}
