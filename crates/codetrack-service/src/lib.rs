//! # codetrack-service
//!
//! Business logic for Code Tracker. The snapshot service normalizes
//! incoming file snapshots, suppresses near-duplicates inside a small time
//! window, and persists the rest through an injected store.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod snapshot;

pub use context::RequestContext;
pub use snapshot::{CreateSnapshot, DedupWindow, SnapshotOutcome, SnapshotService};
