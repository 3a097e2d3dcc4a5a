//! File snapshot ingestion and listing.

pub mod dedup;
pub mod normalize;
pub mod service;

pub use dedup::DedupWindow;
pub use normalize::{compress_content, normalize_timestamp};
pub use service::{CreateSnapshot, SnapshotOutcome, SnapshotService};
