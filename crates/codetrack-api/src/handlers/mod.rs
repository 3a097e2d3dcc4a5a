//! HTTP request handlers.

pub mod health;
pub mod snapshot;

use codetrack_core::error::AppError;

use crate::error::ApiError;

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    AppError::not_found("Not Found").into()
}
