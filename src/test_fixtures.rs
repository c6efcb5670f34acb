//! Test fixtures for exercising lifecycle logic without a cluster.
//!
//! [`FakeCluster`] is an in-memory implementation of the cluster and
//! catalog APIs with knobs for the behaviors the orchestrator must
//! tolerate: slow registration, delayed health, stuck deployment plans
//! and rejected removals.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::cluster::{CatalogApi, ClusterApi, ServiceDescriptor};
use crate::domain::{DeploymentPlan, InstallOptions, PackageRef, PlanStatus, TaskHandle, TaskHealth};
use crate::error::{Result, cluster_command_failed, package_not_found, removal_rejected};

/// A task that satisfies the health invariant
pub fn healthy_task(id: &str) -> TaskHandle {
    TaskHandle {
        id: id.to_string(),
        health_check_results: vec![TaskHealth {
            last_success: Some("2016-05-03T17:41:53.460Z".to_string()),
            consecutive_failures: 0,
        }],
    }
}

/// A task that is failing its health checks
pub fn unhealthy_task(id: &str) -> TaskHandle {
    TaskHandle {
        id: id.to_string(),
        health_check_results: vec![TaskHealth {
            last_success: None,
            consecutive_failures: 3,
        }],
    }
}

/// A task that exposes no health checks at all
pub fn task_without_health(id: &str) -> TaskHandle {
    TaskHandle {
        id: id.to_string(),
        health_check_results: vec![],
    }
}

#[derive(Debug, Clone)]
struct FakeService {
    package: String,
    name: String,
    /// get_service polls remaining before the service is visible
    registered_in: u32,
    /// further polls before aggregate health reports true
    healthy_in: u32,
    /// whether the service answers the framework health-check protocol
    framework: bool,
    tasks: Vec<TaskHandle>,
    endpoint_up: bool,
}

#[derive(Debug, Clone)]
struct FakePlan {
    id: String,
    /// list_plans observations remaining before the plan completes
    settle_in: u32,
    stuck: bool,
    failed: bool,
}

#[derive(Debug, Default)]
struct State {
    catalog: BTreeMap<String, Vec<String>>,
    services: Vec<FakeService>,
    plans: Vec<FakePlan>,
    deleted_nodes: Vec<String>,
    purged: Vec<(String, String)>,
    // Convergence knobs applied to future installs
    registration_polls: u32,
    health_polls: u32,
    plan_polls: u32,
    install_count: u32,
    reject_removals: bool,
}

/// In-memory cluster manager + catalog for tests
#[derive(Debug, Default)]
pub struct FakeCluster {
    state: RefCell<State>,
}

impl FakeCluster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a catalog entry; the last version listed is the latest
    pub fn add_package(&self, name: &str, versions: &[&str]) {
        self.state.borrow_mut().catalog.insert(
            name.to_string(),
            versions.iter().map(ToString::to_string).collect(),
        );
    }

    /// Register a service directly, bypassing install convergence
    pub fn register_service(&self, name: &str, healthy: Option<bool>, tasks: Vec<TaskHandle>) {
        self.state.borrow_mut().services.push(FakeService {
            package: name.to_string(),
            name: name.to_string(),
            registered_in: 0,
            // u32::MAX means "never becomes healthy"
            healthy_in: if healthy == Some(false) { u32::MAX } else { 0 },
            framework: healthy.is_some(),
            tasks,
            endpoint_up: true,
        });
    }

    /// Make future installs take this many polls to register and then
    /// this many further polls to report healthy
    pub fn set_install_latency(&self, registration_polls: u32, health_polls: u32) {
        let mut state = self.state.borrow_mut();
        state.registration_polls = registration_polls;
        state.health_polls = health_polls;
    }

    /// Make plans created by future changes settle after this many observations
    pub fn set_plan_latency(&self, plan_polls: u32) {
        self.state.borrow_mut().plan_polls = plan_polls;
    }

    /// Reject all subsequent removal requests
    pub fn reject_removals(&self) {
        self.state.borrow_mut().reject_removals = true;
    }

    /// Push a plan that completes after `settle_in` observations
    pub fn push_plan(&self, id: &str, settle_in: u32) {
        self.state.borrow_mut().plans.push(FakePlan {
            id: id.to_string(),
            settle_in,
            stuck: false,
            failed: false,
        });
    }

    /// Push a plan that never leaves the Active state
    pub fn push_stuck_plan(&self, id: &str) {
        self.state.borrow_mut().plans.push(FakePlan {
            id: id.to_string(),
            settle_in: 0,
            stuck: true,
            failed: false,
        });
    }

    /// Push a plan already in the Failed state
    pub fn push_failed_plan(&self, id: &str) {
        self.state.borrow_mut().plans.push(FakePlan {
            id: id.to_string(),
            settle_in: 0,
            stuck: false,
            failed: true,
        });
    }

    pub fn has_service(&self, name: &str) -> bool {
        self.state.borrow().services.iter().any(|s| s.name == name)
    }

    pub fn was_node_deleted(&self, path: &str) -> bool {
        self.state
            .borrow()
            .deleted_nodes
            .iter()
            .any(|p| p == path)
    }

    pub fn was_purged(&self, role: &str, namespace: &str) -> bool {
        self.state
            .borrow()
            .purged
            .iter()
            .any(|(r, n)| r == role && n == namespace)
    }

    pub fn all_plans_settled(&self) -> bool {
        self.state
            .borrow()
            .plans
            .iter()
            .all(|p| p.failed || (!p.stuck && p.settle_in == 0))
    }

    pub fn install_count(&self) -> u32 {
        self.state.borrow().install_count
    }
}

impl ClusterApi for FakeCluster {
    fn install(&self, package: &str, options: &InstallOptions) -> Result<String> {
        let mut state = self.state.borrow_mut();
        if !state.catalog.contains_key(package) {
            return Err(cluster_command_failed(
                format!("package install {package}"),
                "package not found in catalog",
            ));
        }
        let service = options
            .service_name()
            .unwrap_or(package)
            .to_string();
        // The cluster manager owns the namespace race: same identity twice
        // is a non-zero outcome
        if state.services.iter().any(|s| s.name == service) {
            return Err(cluster_command_failed(
                format!("package install {package}"),
                format!("service '{service}' already installed"),
            ));
        }

        state.install_count += 1;
        let (registered_in, healthy_in, plan_polls) =
            (state.registration_polls, state.health_polls, state.plan_polls);
        state.services.push(FakeService {
            package: package.to_string(),
            name: service.clone(),
            registered_in,
            healthy_in,
            framework: true,
            tasks: vec![healthy_task(&format!("{service}.instance-0"))],
            endpoint_up: true,
        });
        let deployment_id = format!("deploy-{}", state.install_count);
        state.plans.push(FakePlan {
            id: deployment_id.clone(),
            settle_in: plan_polls,
            stuck: false,
            failed: false,
        });
        Ok(deployment_id)
    }

    fn get_service(&self, name: &str) -> Result<Option<ServiceDescriptor>> {
        let mut state = self.state.borrow_mut();
        let Some(service) = state
            .services
            .iter_mut()
            // A service is discoverable by its deployed identity or by the
            // package that installed it
            .find(|s| s.name == name || s.package == name)
        else {
            return Ok(None);
        };
        if service.registered_in > 0 {
            service.registered_in -= 1;
            return Ok(None);
        }
        let healthy = if service.framework {
            if service.healthy_in > 0 && service.healthy_in != u32::MAX {
                service.healthy_in -= 1;
            }
            Some(service.healthy_in == 0)
        } else {
            None
        };
        Ok(Some(ServiceDescriptor {
            name: service.name.clone(),
            healthy,
            tasks_running: service.tasks.len() as u32,
        }))
    }

    fn get_service_task(&self, package: &str, service: &str) -> Result<Option<TaskHandle>> {
        let state = self.state.borrow();
        Ok(state
            .services
            .iter()
            .find(|s| s.package == package && s.name == service && s.registered_in == 0)
            .and_then(|s| s.tasks.first().cloned()))
    }

    fn get_tasks(&self, prefix: &str) -> Result<Vec<TaskHandle>> {
        let state = self.state.borrow();
        Ok(state
            .services
            .iter()
            .flat_map(|s| s.tasks.iter())
            .filter(|t| t.id.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn list_plans(&self) -> Result<Vec<DeploymentPlan>> {
        let mut state = self.state.borrow_mut();
        let mut plans = Vec::with_capacity(state.plans.len());
        for plan in &mut state.plans {
            let status = if plan.failed {
                PlanStatus::Failed
            } else if plan.stuck {
                PlanStatus::Active
            } else if plan.settle_in == 0 {
                PlanStatus::Completed
            } else {
                plan.settle_in -= 1;
                PlanStatus::Active
            };
            plans.push(DeploymentPlan {
                id: plan.id.clone(),
                status,
            });
        }
        Ok(plans)
    }

    fn endpoint_reachable(&self, service: &str) -> Result<bool> {
        let state = self.state.borrow();
        Ok(state
            .services
            .iter()
            .any(|s| s.name == service && s.registered_in == 0 && s.endpoint_up))
    }

    fn delete_node(&self, path: &str) -> Result<()> {
        self.state.borrow_mut().deleted_nodes.push(path.to_string());
        Ok(())
    }

    fn delete_persistent_data(&self, role: &str, namespace: &str) -> Result<()> {
        self.state
            .borrow_mut()
            .purged
            .push((role.to_string(), namespace.to_string()));
        Ok(())
    }
}

impl CatalogApi for FakeCluster {
    fn resolve_package(&self, name: &str, version: Option<&str>) -> Result<PackageRef> {
        let state = self.state.borrow();
        let Some(versions) = state.catalog.get(name) else {
            return Err(package_not_found(name, version));
        };
        match version {
            Some(v) if versions.iter().any(|known| known == v) => {
                Ok(PackageRef::new(name, Some(v)))
            }
            Some(v) => Err(package_not_found(name, Some(v))),
            None => Ok(PackageRef::new(name, versions.last().cloned())),
        }
    }

    fn uninstall_app(&self, package: &str, _all: bool, service: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.reject_removals {
            return Err(removal_rejected(service, "removal disabled by operator"));
        }
        let before = state.services.len();
        state
            .services
            .retain(|s| !(s.package == package && s.name == service));
        if state.services.len() == before {
            return Err(removal_rejected(service, "service not found"));
        }
        let plan_polls = state.plan_polls;
        let plan_id = format!("undeploy-{service}");
        state.plans.push(FakePlan {
            id: plan_id,
            settle_in: plan_polls,
            stuck: false,
            failed: false,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_registers_service() {
        let cluster = FakeCluster::new();
        cluster.add_package("marathon", &["1.1.1"]);
        cluster
            .install("marathon", &InstallOptions::new())
            .unwrap();
        assert!(cluster.has_service("marathon"));
    }

    #[test]
    fn test_install_unknown_package_fails() {
        let cluster = FakeCluster::new();
        let err = cluster
            .install("absent", &InstallOptions::new())
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_duplicate_install_is_rejected() {
        let cluster = FakeCluster::new();
        cluster.add_package("marathon", &["1.1.1"]);
        cluster
            .install("marathon", &InstallOptions::new())
            .unwrap();
        let err = cluster
            .install("marathon", &InstallOptions::new())
            .unwrap_err();
        assert!(err.to_string().contains("already installed"));
    }

    #[test]
    fn test_registration_latency() {
        let cluster = FakeCluster::new();
        cluster.add_package("marathon", &["1.1.1"]);
        cluster.set_install_latency(2, 0);
        cluster
            .install("marathon", &InstallOptions::new())
            .unwrap();

        assert!(cluster.get_service("marathon").unwrap().is_none());
        assert!(cluster.get_service("marathon").unwrap().is_none());
        assert!(cluster.get_service("marathon").unwrap().is_some());
    }

    #[test]
    fn test_service_name_override() {
        let cluster = FakeCluster::new();
        cluster.add_package("marathon", &["1.1.1"]);
        let options = InstallOptions::new().with_service_name("test-marathon");
        cluster.install("marathon", &options).unwrap();
        assert!(cluster.has_service("test-marathon"));
        assert!(!cluster.has_service("marathon"));
        // Discoverable by package identity as well
        assert!(cluster.get_service("marathon").unwrap().is_some());
    }
}
