//! Time-windowed duplicate detection.
//!
//! Editors auto-save in bursts. A candidate snapshot is treated as a
//! duplicate when a stored snapshot of the same file name and path has a
//! timestamp within the tolerance on either side. Content is not compared:
//! the earlier stored row wins even if the text changed inside the window.

use chrono::{NaiveDateTime, TimeDelta};
use tracing::debug;

use codetrack_core::result::AppResult;
use codetrack_database::store::SnapshotTransaction;
use codetrack_entity::snapshot::Snapshot;

/// A symmetric, inclusive window around a candidate timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DedupWindow {
    tolerance: TimeDelta,
}

impl DedupWindow {
    /// Default half-width in seconds.
    pub const DEFAULT_SECONDS: u32 = 5;

    /// Window of `seconds` on each side.
    pub fn from_seconds(seconds: u32) -> Self {
        Self {
            tolerance: TimeDelta::seconds(i64::from(seconds)),
        }
    }

    /// `[ts - tolerance, ts + tolerance]`, clamped to the representable range.
    pub fn bounds(&self, ts: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
        let start = ts
            .checked_sub_signed(self.tolerance)
            .unwrap_or(NaiveDateTime::MIN);
        let end = ts
            .checked_add_signed(self.tolerance)
            .unwrap_or(NaiveDateTime::MAX);
        (start, end)
    }

    /// Look for a stored snapshot that makes the candidate redundant.
    ///
    /// Matches `file_name` and `file_path` exactly; among matches inside
    /// the window the latest timestamp wins.
    pub async fn find_duplicate(
        &self,
        tx: &mut dyn SnapshotTransaction,
        file_name: &str,
        file_path: &str,
        ts: NaiveDateTime,
    ) -> AppResult<Option<Snapshot>> {
        let (start, end) = self.bounds(ts);
        let existing = tx
            .find_latest_in_window(file_name, file_path, start, end)
            .await?;
        debug!(
            file_name,
            %start,
            %end,
            existing_id = existing.as_ref().map(|s| s.id),
            "Dedup window probe"
        );
        Ok(existing)
    }
}

impl Default for DedupWindow {
    fn default() -> Self {
        Self::from_seconds(Self::DEFAULT_SECONDS)
    }
}
