//! `ApiKey` extractor: pulls the owner key from the `x-api-key` header.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use codetrack_core::error::AppError;
use codetrack_service::context::RequestContext;

use crate::error::ApiError;

/// Header carrying the caller's key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Longest key the `tracked_files.key` column can hold, in characters.
pub const MAX_API_KEY_CHARS: usize = 255;

/// Request context for a caller that presented a non-empty API key.
///
/// Keys are not checked against any registry. A key must be non-empty and
/// at most [`MAX_API_KEY_CHARS`] characters long.
#[derive(Debug, Clone)]
pub struct ApiKey(pub RequestContext);

impl std::ops::Deref for ApiKey {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let key = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::authentication("Missing x-api-key header"))?;

        if key.chars().count() > MAX_API_KEY_CHARS {
            return Err(AppError::authentication(format!(
                "x-api-key header exceeds {MAX_API_KEY_CHARS} characters"
            ))
            .into());
        }

        Ok(ApiKey(RequestContext::new(key)))
    }
}
