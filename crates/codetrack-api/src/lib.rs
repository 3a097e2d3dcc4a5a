//! # codetrack-api
//!
//! HTTP API layer for Code Tracker built on Axum.
//!
//! Provides the snapshot and health endpoints under `/api/v1`, the
//! `x-api-key` and JSON body extractors, middleware (request logging, CORS,
//! compression, tracing), DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
