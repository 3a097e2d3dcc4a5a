//! Request context carrying the caller's API key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Context for the current request.
///
/// Extracted at the HTTP boundary and passed into service methods so every
/// operation knows which API key owns the data it reads or writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// Opaque owner key from the `x-api-key` header. Never empty.
    pub api_key: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            request_time: Utc::now(),
        }
    }
}
