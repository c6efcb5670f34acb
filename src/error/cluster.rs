//! Cluster manager client errors

use super::StevedoreError;

/// Creates a cluster command failed error
pub fn command_failed(
    command: impl Into<String>,
    reason: impl Into<String>,
) -> StevedoreError {
    StevedoreError::ClusterCommandFailed {
        command: command.into(),
        reason: reason.into(),
    }
}

/// Creates a response parse failed error
pub fn parse_failed(command: impl Into<String>, reason: impl Into<String>) -> StevedoreError {
    StevedoreError::ResponseParseFailed {
        command: command.into(),
        reason: reason.into(),
    }
}
