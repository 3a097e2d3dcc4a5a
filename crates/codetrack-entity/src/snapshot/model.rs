//! Snapshot entity model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One stored observation of a file's content, owned by an API key.
///
/// Rows are immutable: they are inserted once and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Snapshot {
    /// Store-assigned surrogate key.
    pub id: i64,
    /// File name as sent by the client.
    pub file_name: String,
    /// File path as sent by the client (up to 1024 characters).
    pub file_path: String,
    /// Owning API key.
    pub key: String,
    /// Whitespace-compressed file content.
    pub content: String,
    /// Client-supplied instant, normalized to naive UTC.
    pub timestamp: NaiveDateTime,
    /// Insertion instant (naive UTC), used for listing order.
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new snapshot row.
///
/// Callers are expected to have compressed `content` and normalized
/// `timestamp` already.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSnapshot {
    /// File name.
    pub file_name: String,
    /// File path.
    pub file_path: String,
    /// Owning API key.
    pub key: String,
    /// Compressed content.
    pub content: String,
    /// Naive UTC timestamp.
    pub timestamp: NaiveDateTime,
}

impl NewSnapshot {
    /// Materialize the row as it looks after insert.
    pub fn into_snapshot(self, id: i64, created_at: NaiveDateTime) -> Snapshot {
        Snapshot {
            id,
            file_name: self.file_name,
            file_path: self.file_path,
            key: self.key,
            content: self.content,
            timestamp: self.timestamp,
            created_at,
        }
    }
}
