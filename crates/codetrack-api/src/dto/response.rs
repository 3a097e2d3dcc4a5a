//! Response DTOs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use codetrack_entity::snapshot::Snapshot;

/// Standard success envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Human-readable outcome.
    pub message: String,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wraps `data` with a message.
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// Error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// What went wrong.
    pub detail: String,
}

/// A stored snapshot as returned to clients. The owning key is not echoed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotResponse {
    /// Snapshot ID.
    pub id: i64,
    /// File name.
    #[serde(rename = "fileName")]
    pub file_name: String,
    /// File path.
    #[serde(rename = "filePath")]
    pub file_path: String,
    /// Whitespace-compressed content.
    #[serde(rename = "fullContent")]
    pub full_content: String,
    /// Normalized UTC timestamp.
    pub timestamp: NaiveDateTime,
    /// Insertion time (UTC).
    pub created_at: NaiveDateTime,
}

impl From<Snapshot> for SnapshotResponse {
    fn from(s: Snapshot) -> Self {
        Self {
            id: s.id,
            file_name: s.file_name,
            file_path: s.file_path,
            full_content: s.content,
            timestamp: s.timestamp,
            created_at: s.created_at,
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: String,
    /// Current UTC time.
    pub timestamp: NaiveDateTime,
}

/// Liveness plus store connectivity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Current UTC time.
    pub timestamp: NaiveDateTime,
    /// `"connected"` or `"unavailable"`.
    pub database: String,
}
