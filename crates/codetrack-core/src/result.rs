//! Convenience result type alias for Code Tracker.

use crate::error::AppError;

/// A specialized `Result` type for Code Tracker operations.
pub type AppResult<T> = Result<T, AppError>;
