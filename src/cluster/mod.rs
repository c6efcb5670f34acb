//! Cluster manager and catalog client traits
//!
//! The cluster manager and the package catalog are external collaborators;
//! these traits are the seam between the orchestration logic and whatever
//! transport reaches them. The production adapter ([`cli::CliCluster`])
//! drives an external cluster CLI; tests use an in-memory fake.

pub mod cli;

pub use cli::CliCluster;

use serde::{Deserialize, Serialize};

use crate::domain::{DeploymentPlan, InstallOptions, PackageRef, TaskHandle};
use crate::error::Result;

/// A registered service as the cluster manager describes it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    pub name: String,
    /// Aggregate health via the framework health-check protocol.
    /// `None` when the service does not answer the protocol.
    #[serde(default)]
    pub healthy: Option<bool>,
    #[serde(default)]
    pub tasks_running: u32,
}

/// Cluster manager API: install requests, cluster state queries and
/// persistent-state deletion.
pub trait ClusterApi {
    /// Issue an install request. Returns the deployment id the cluster
    /// manager assigned to the change. A duplicate service identity must
    /// be rejected with an error, never silently accepted.
    fn install(&self, package: &str, options: &InstallOptions) -> Result<String>;

    /// Look up a registered service by name
    fn get_service(&self, name: &str) -> Result<Option<ServiceDescriptor>>;

    /// Look up a single task belonging to `service` under `package`
    fn get_service_task(&self, package: &str, service: &str) -> Result<Option<TaskHandle>>;

    /// List tasks whose id starts with `prefix`
    fn get_tasks(&self, prefix: &str) -> Result<Vec<TaskHandle>>;

    /// List all deployment plans the cluster manager knows about
    fn list_plans(&self) -> Result<Vec<DeploymentPlan>>;

    /// Probe whether the service's network endpoint answers
    fn endpoint_reachable(&self, service: &str) -> Result<bool>;

    /// Delete a node from the cluster's registry tree (e.g. `/universe/<service>`)
    fn delete_node(&self, path: &str) -> Result<()>;

    /// Delete persistent state under a role/namespace pair
    fn delete_persistent_data(&self, role: &str, namespace: &str) -> Result<()>;
}

/// Package catalog API: name/version resolution and uninstall requests
/// (removals go through the catalog service, which owns install metadata).
pub trait CatalogApi {
    /// Resolve a package name (+ optional version) to an installable
    /// descriptor. Fails with `PackageNotFound` when the catalog has no
    /// such entry.
    fn resolve_package(&self, name: &str, version: Option<&str>) -> Result<PackageRef>;

    /// Remove one or all instances of `service` installed from `package`.
    /// Fails with `RemovalRejected` when the cluster manager refuses.
    fn uninstall_app(&self, package: &str, all: bool, service: &str) -> Result<()>;
}
