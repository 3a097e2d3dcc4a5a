//! # codetrack-database
//!
//! Snapshot persistence for Code Tracker: the [`SnapshotStore`] seam, a
//! PostgreSQL implementation backed by sqlx, an in-memory implementation,
//! connection pool management, and startup schema initialization.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemorySnapshotStore;
pub use repositories::SnapshotRepository;
pub use store::{SnapshotStore, SnapshotTransaction};
