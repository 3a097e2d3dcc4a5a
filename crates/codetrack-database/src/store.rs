//! The snapshot store seam.
//!
//! The service layer only talks to these traits, so the backing database
//! is chosen at startup and injected rather than reached through globals.

use std::fmt;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use codetrack_core::result::AppResult;
use codetrack_entity::snapshot::{NewSnapshot, Snapshot};

/// A durable table of snapshot rows.
#[async_trait]
pub trait SnapshotStore: Send + Sync + fmt::Debug + 'static {
    /// Open a unit of work. The returned transaction holds its connection
    /// until it is committed or dropped; dropping rolls it back.
    async fn begin(&self) -> AppResult<Box<dyn SnapshotTransaction>>;

    /// All snapshots owned by `key`, newest insert first.
    async fn list_by_key(&self, key: &str) -> AppResult<Vec<Snapshot>>;

    /// Cheap connectivity probe.
    async fn ping(&self) -> AppResult<()>;
}

/// A unit of work against a [`SnapshotStore`].
#[async_trait]
pub trait SnapshotTransaction: Send {
    /// The snapshot of exactly this `file_name` and `file_path` whose
    /// timestamp lies in `[start, end]` (inclusive), latest timestamp first.
    async fn find_latest_in_window(
        &mut self,
        file_name: &str,
        file_path: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Option<Snapshot>>;

    /// Insert a row; the store assigns `id` and `created_at`.
    async fn insert(&mut self, snapshot: &NewSnapshot) -> AppResult<Snapshot>;

    /// Make all inserts in this transaction visible.
    async fn commit(self: Box<Self>) -> AppResult<()>;
}
