//! Repository implementations backed by PostgreSQL.

pub mod snapshot;

pub use snapshot::SnapshotRepository;
