//! In-memory snapshot store.
//!
//! Used for local development without PostgreSQL and as the backing store
//! in tests. Transactions stage inserts privately and publish them on
//! commit, so an abandoned transaction leaves nothing behind.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDateTime, SubsecRound, Utc};
use tokio::sync::Mutex;
use tracing::debug;

use codetrack_core::result::AppResult;
use codetrack_entity::snapshot::{NewSnapshot, Snapshot};

use crate::store::{SnapshotStore, SnapshotTransaction};

#[derive(Debug, Default)]
struct MemoryState {
    rows: Vec<Snapshot>,
    /// Last id handed out. Ids consumed by rolled-back inserts are not reused.
    last_id: i64,
}

/// Process-local [`SnapshotStore`].
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemorySnapshotStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed rows.
    pub async fn len(&self) -> usize {
        self.state.lock().await.rows.len()
    }

    /// Whether no rows have been committed.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn begin(&self) -> AppResult<Box<dyn SnapshotTransaction>> {
        Ok(Box::new(MemorySnapshotTransaction {
            state: Arc::clone(&self.state),
            pending: Vec::new(),
        }))
    }

    async fn list_by_key(&self, key: &str) -> AppResult<Vec<Snapshot>> {
        let state = self.state.lock().await;
        let mut rows: Vec<Snapshot> = state.rows.iter().filter(|s| s.key == key).cloned().collect();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

struct MemorySnapshotTransaction {
    state: Arc<Mutex<MemoryState>>,
    pending: Vec<Snapshot>,
}

#[async_trait]
impl SnapshotTransaction for MemorySnapshotTransaction {
    async fn find_latest_in_window(
        &mut self,
        file_name: &str,
        file_path: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Option<Snapshot>> {
        let state = self.state.lock().await;
        Ok(state
            .rows
            .iter()
            .chain(self.pending.iter())
            .filter(|s| s.file_name == file_name && s.file_path == file_path)
            .filter(|s| s.timestamp >= start && s.timestamp <= end)
            .max_by_key(|s| s.timestamp)
            .cloned())
    }

    async fn insert(&mut self, snapshot: &NewSnapshot) -> AppResult<Snapshot> {
        let id = {
            let mut state = self.state.lock().await;
            state.last_id += 1;
            state.last_id
        };
        // Match the microsecond precision of a PostgreSQL TIMESTAMP column.
        let created_at = Utc::now().naive_utc().trunc_subsecs(6);
        let row = snapshot.clone().into_snapshot(id, created_at);
        self.pending.push(row.clone());
        Ok(row)
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        let Self { state, pending } = *self;
        debug!(rows = pending.len(), "Committing in-memory transaction");
        state.lock().await.rows.extend(pending);
        Ok(())
    }
}
