//! Value types shared across crates.

pub mod timestamp;

pub use timestamp::ClientTimestamp;
