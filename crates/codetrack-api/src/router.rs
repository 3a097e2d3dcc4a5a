//! Route definitions for the Code Tracker HTTP API.
//!
//! All routes are mounted under `/api/v1`. The router receives `AppState`
//! and passes it to handlers via Axum's `State` extractor.

use axum::{Router, extract::DefaultBodyLimit, middleware as axum_middleware, routing::get};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes, the body limit, and request
/// logging.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;

    let api_routes = Router::new()
        .merge(snapshot_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api/v1", api_routes)
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// File snapshot create and list
fn snapshot_routes() -> Router<AppState> {
    Router::new().route(
        "/files",
        get(handlers::snapshot::list_snapshots).post(handlers::snapshot::create_snapshot),
    )
}

/// Liveness and store probe
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
