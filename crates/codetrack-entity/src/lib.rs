//! # codetrack-entity
//!
//! Domain entity models for Code Tracker. Every struct in this crate
//! represents a database table row or the data needed to create one.
//! Row types derive `sqlx::FromRow`.

pub mod snapshot;

pub use snapshot::{NewSnapshot, Snapshot};
