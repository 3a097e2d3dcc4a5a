//! Snapshot ingestion settings.

use serde::{Deserialize, Serialize};

/// Tunables for snapshot ingestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Half-width of the deduplication window in seconds. A candidate is a
    /// duplicate when a stored snapshot of the same file lies within this
    /// many seconds on either side.
    #[serde(default = "default_dedup_window")]
    pub dedup_window_seconds: u32,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            dedup_window_seconds: default_dedup_window(),
        }
    }
}

fn default_dedup_window() -> u32 {
    5
}
