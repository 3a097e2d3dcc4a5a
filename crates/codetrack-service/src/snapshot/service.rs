//! Snapshot create/list orchestration.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use codetrack_core::error::ErrorKind;
use codetrack_core::result::AppResult;
use codetrack_core::types::ClientTimestamp;
use codetrack_database::store::SnapshotStore;
use codetrack_entity::snapshot::{NewSnapshot, Snapshot};

use crate::context::RequestContext;
use crate::snapshot::dedup::DedupWindow;
use crate::snapshot::normalize::{compress_content, normalize_timestamp};

/// Raw snapshot data as received from a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSnapshot {
    /// File name.
    pub file_name: String,
    /// File path.
    pub file_path: String,
    /// Uncompressed file content.
    pub full_content: String,
    /// Client timestamp, with or without offset.
    pub timestamp: ClientTimestamp,
}

/// Result of a create call. A duplicate is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotOutcome {
    /// A new row was inserted.
    Created(Snapshot),
    /// An equivalent recent row already existed; nothing was written.
    AlreadyStored(Snapshot),
}

impl SnapshotOutcome {
    /// Whether a new row was written.
    pub fn is_new(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    /// The created or pre-existing snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        match self {
            Self::Created(s) | Self::AlreadyStored(s) => s,
        }
    }

    /// Consume the outcome, keeping the snapshot.
    pub fn into_snapshot(self) -> Snapshot {
        match self {
            Self::Created(s) | Self::AlreadyStored(s) => s,
        }
    }
}

/// Normalizes, deduplicates, and persists file snapshots.
#[derive(Debug, Clone)]
pub struct SnapshotService {
    /// Backing store.
    store: Arc<dyn SnapshotStore>,
    /// Duplicate suppression window.
    window: DedupWindow,
}

impl SnapshotService {
    /// Creates a new snapshot service.
    pub fn new(store: Arc<dyn SnapshotStore>, window: DedupWindow) -> Self {
        Self { store, window }
    }

    /// Store a snapshot for the caller's key unless a recent equivalent
    /// exists.
    ///
    /// At most one row is inserted. Any store failure rolls back the
    /// transaction and surfaces as `Failed to save file: <cause>`.
    pub async fn create_snapshot(
        &self,
        ctx: &RequestContext,
        input: CreateSnapshot,
    ) -> AppResult<SnapshotOutcome> {
        let file_name = input.file_name.clone();
        self.try_create(ctx, input).await.map_err(|e| {
            error!(file_name = %file_name, error = %e, cause = ?e.source, "Failed to save file");
            e.context(ErrorKind::Database, "Failed to save file")
        })
    }

    async fn try_create(
        &self,
        ctx: &RequestContext,
        input: CreateSnapshot,
    ) -> AppResult<SnapshotOutcome> {
        let content = compress_content(&input.full_content);
        let timestamp = normalize_timestamp(input.timestamp);

        // Dropping `tx` on any early return rolls it back.
        let mut tx = self.store.begin().await?;

        if let Some(existing) = self
            .window
            .find_duplicate(&mut *tx, &input.file_name, &input.file_path, timestamp)
            .await?
        {
            let delta = (timestamp - existing.timestamp).num_milliseconds().abs() as f64 / 1000.0;
            info!(
                file_name = %input.file_name,
                existing_id = existing.id,
                delta_seconds = delta,
                "Existing snapshot detected"
            );
            return Ok(SnapshotOutcome::AlreadyStored(existing));
        }

        let created = tx
            .insert(&NewSnapshot {
                file_name: input.file_name,
                file_path: input.file_path,
                key: ctx.api_key.clone(),
                content,
                timestamp,
            })
            .await?;
        tx.commit().await?;

        info!(id = created.id, file_name = %created.file_name, "File snapshot created");
        Ok(SnapshotOutcome::Created(created))
    }

    /// All snapshots owned by the caller's key, most recently inserted first.
    pub async fn list_snapshots(&self, ctx: &RequestContext) -> AppResult<Vec<Snapshot>> {
        let rows = self.store.list_by_key(&ctx.api_key).await.map_err(|e| {
            error!(error = %e, cause = ?e.source, "Failed to list files");
            e.context(ErrorKind::Database, "Failed to list files")
        })?;
        info!(count = rows.len(), "Listed file snapshots");
        Ok(rows)
    }
}
