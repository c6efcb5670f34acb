//! Service, task and health domain types

use serde::{Deserialize, Serialize};

/// Lifecycle state of a managed service.
///
/// Transitions are driven exclusively by polling the service registry;
/// the orchestrator owns the handle and never mutates cluster state directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceStatus {
    /// Install request issued, not yet visible in the registry
    Pending,
    /// Visible in the registry, health not yet observed
    Registered,
    /// Registered and all health checks passing
    Healthy,
    /// Registered but failing health checks
    Unhealthy,
    /// Uninstall completed and persistent data deleted
    Removed,
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ServiceStatus::Pending => "pending",
            ServiceStatus::Registered => "registered",
            ServiceStatus::Healthy => "healthy",
            ServiceStatus::Unhealthy => "unhealthy",
            ServiceStatus::Removed => "not installed",
        };
        write!(f, "{label}")
    }
}

/// Handle to a service whose lifecycle the orchestrator manages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceHandle {
    /// Catalog package the service was installed from
    pub package_name: String,
    /// Deployed identity (catalog default or `service.name` override)
    pub service_name: String,
    pub status: ServiceStatus,
}

impl ServiceHandle {
    /// Create a handle for a freshly issued install request
    pub fn pending(package_name: impl Into<String>, service_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            service_name: service_name.into(),
            status: ServiceStatus::Pending,
        }
    }
}

/// Health record of a single task, as reported by the cluster manager
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskHealth {
    /// Timestamp of the last successful health check, if any
    pub last_success: Option<String>,
    /// Count of health check failures since the last success
    #[serde(default)]
    pub consecutive_failures: u32,
}

impl TaskHealth {
    /// A task is healthy iff it has seen a successful check and has no
    /// failures since.
    pub fn is_passing(&self) -> bool {
        self.last_success.is_some() && self.consecutive_failures == 0
    }
}

/// A task (instance) belonging to a service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskHandle {
    pub id: String,
    /// Health check results; empty when the task exposes no health checks
    #[serde(default)]
    pub health_check_results: Vec<TaskHealth>,
}

impl TaskHandle {
    /// True iff the task reports health and every result passes
    pub fn is_healthy(&self) -> bool {
        !self.health_check_results.is_empty()
            && self.health_check_results.iter().all(TaskHealth::is_passing)
    }
}

/// How a package's health is verified after install.
///
/// Selected explicitly per package: packages whose workloads are not
/// frameworks do not answer the framework health-check protocol and need
/// the per-task inspection instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStrategy {
    /// Framework health-check protocol (aggregate service health)
    Standard,
    /// Inspect every task under a task-group prefix individually
    DeepTask { prefix: String },
}
