//! `JsonBody` extractor: JSON deserialization plus `validator` checks.
//!
//! Oversized bodies are reported as 413; every other rejection is a 422
//! `{ "detail": ... }`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use validator::Validate;

use codetrack_core::error::AppError;

use crate::error::ApiError;

/// A validated JSON request body.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_error)?;

        value
            .validate()
            .map_err(|e| AppError::validation(format!("Invalid request body: {e}")))?;

        Ok(JsonBody(value))
    }
}

fn rejection_error(rejection: JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large(rejection.body_text())
    } else {
        AppError::validation(rejection.body_text())
    }
}
