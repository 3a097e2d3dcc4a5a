//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use codetrack_core::types::ClientTimestamp;
use codetrack_service::snapshot::CreateSnapshot;

/// Body of `POST /api/v1/files`. Field names follow the editor plugin's
/// camelCase wire format.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSnapshotRequest {
    /// Name of the file.
    #[validate(
        length(max = 255, message = "fileName must be at most 255 characters"),
        custom(function = "reject_nul")
    )]
    pub file_name: String,
    /// Absolute path of the file.
    #[validate(
        length(max = 1024, message = "filePath must be at most 1024 characters"),
        custom(function = "reject_nul")
    )]
    pub file_path: String,
    /// Full content of the file.
    #[validate(custom(function = "reject_nul"))]
    pub full_content: String,
    /// When the snapshot was taken.
    pub timestamp: ClientTimestamp,
}

/// PostgreSQL text columns cannot hold U+0000.
fn reject_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        let mut err = ValidationError::new("nul_character");
        err.message = Some("must not contain NUL (U+0000) characters".into());
        return Err(err);
    }
    Ok(())
}

impl From<CreateSnapshotRequest> for CreateSnapshot {
    fn from(req: CreateSnapshotRequest) -> Self {
        Self {
            file_name: req.file_name,
            file_path: req.file_path,
            full_content: req.full_content,
            timestamp: req.timestamp,
        }
    }
}
