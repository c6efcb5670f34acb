//! Lifecycle operation errors

use super::StevedoreError;

/// Creates an install timeout error
pub fn install_timeout(service: impl Into<String>, waited_secs: u64) -> StevedoreError {
    StevedoreError::InstallTimeout {
        service: service.into(),
        waited_secs,
    }
}

/// Creates a deployment timeout error
pub fn deployment_timeout(waited_secs: u64, pending: usize) -> StevedoreError {
    StevedoreError::DeploymentTimeout {
        waited_secs,
        pending,
    }
}

/// Creates a removal rejected error
pub fn removal_rejected(
    service: impl Into<String>,
    reason: impl Into<String>,
) -> StevedoreError {
    StevedoreError::RemovalRejected {
        service: service.into(),
        reason: reason.into(),
    }
}

/// Creates a duplicate install accepted error
pub fn duplicate_accepted(package: impl Into<String>) -> StevedoreError {
    StevedoreError::DuplicateInstallAccepted {
        package: package.into(),
    }
}

/// Creates an endpoint still reachable error
pub fn endpoint_still_reachable(service: impl Into<String>) -> StevedoreError {
    StevedoreError::EndpointStillReachable {
        service: service.into(),
    }
}

/// Creates a health check failed error
pub fn health_check_failed(
    service: impl Into<String>,
    reason: impl Into<String>,
) -> StevedoreError {
    StevedoreError::HealthCheckFailed {
        service: service.into(),
        reason: reason.into(),
    }
}
