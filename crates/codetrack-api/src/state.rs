//! Application state shared across all handlers.

use std::sync::Arc;

use codetrack_core::config::AppConfig;
use codetrack_database::store::SnapshotStore;
use codetrack_service::snapshot::{DedupWindow, SnapshotService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Snapshot store, for health probes
    pub store: Arc<dyn SnapshotStore>,
    /// Snapshot service
    pub snapshot_service: Arc<SnapshotService>,
}

impl AppState {
    /// Assemble state around an already-initialized store.
    pub fn new(config: AppConfig, store: Arc<dyn SnapshotStore>) -> Self {
        let window = DedupWindow::from_seconds(config.snapshots.dedup_window_seconds);
        let snapshot_service = Arc::new(SnapshotService::new(Arc::clone(&store), window));

        Self {
            config: Arc::new(config),
            store,
            snapshot_service,
        }
    }
}
