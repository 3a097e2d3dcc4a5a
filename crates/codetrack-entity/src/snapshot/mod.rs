//! File snapshot entities.

pub mod model;

pub use model::{NewSnapshot, Snapshot};
