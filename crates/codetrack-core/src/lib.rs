//! # codetrack-core
//!
//! Core crate for the Code Tracker service. Contains the configuration
//! schema and loader, the unified error system, and value types shared by
//! the store, service, and HTTP layers.
//!
//! This crate has **no** internal dependencies on other Code Tracker crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
