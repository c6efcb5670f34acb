//! Configuration errors

use super::StevedoreError;

/// Creates a configuration not found error
pub fn not_found(path: impl Into<String>) -> StevedoreError {
    StevedoreError::ConfigNotFound { path: path.into() }
}

/// Creates a configuration parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> StevedoreError {
    StevedoreError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
