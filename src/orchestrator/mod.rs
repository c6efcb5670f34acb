//! Package lifecycle orchestration
//!
//! Drives a managed service through
//! `Pending -> Registered -> Healthy -> Removed` using only bounded
//! polling against the cluster APIs. Every blocking operation has a
//! deadline from [`PollTiming`]; a missed deadline is a typed error,
//! never a hang.
//!
//! Error discipline: primary operations propagate failures to the
//! caller. Only [`Orchestrator::cleanup`] suppresses them, because
//! teardown must not mask the outcome it is tearing down after.

use std::time::Instant;

use crate::catalog::PackageCatalogClient;
use crate::cluster::{CatalogApi, ClusterApi};
use crate::config::PollTiming;
use crate::domain::{
    HealthStrategy, InstallOptions, PackageRef, ServiceHandle, ServiceStatus, TaskHandle,
};
use crate::error::{
    Result, duplicate_install_accepted, endpoint_still_reachable, health_check_failed,
    install_timeout,
};
use crate::registry::ServiceRegistry;
use crate::waiter::DeploymentWaiter;

/// Orchestrates install, verification and teardown of catalog packages
pub struct Orchestrator<C> {
    api: C,
    timing: PollTiming,
}

impl<C: ClusterApi + CatalogApi> Orchestrator<C> {
    pub fn new(api: C, timing: PollTiming) -> Self {
        Self { api, timing }
    }

    pub fn api(&self) -> &C {
        &self.api
    }

    pub fn catalog(&self) -> PackageCatalogClient<'_, C> {
        PackageCatalogClient::new(&self.api)
    }

    pub fn registry(&self) -> ServiceRegistry<'_, C> {
        ServiceRegistry::new(&self.api, self.timing.poll_interval)
    }

    pub fn waiter(&self) -> DeploymentWaiter<'_, C> {
        DeploymentWaiter::new(&self.api, self.timing.poll_interval, self.timing.deploy_timeout)
    }

    /// Install a package and wait until its service is registered and
    /// healthy, then drain deployment plans.
    ///
    /// The deployed identity is `service.name` from `options` when set,
    /// otherwise the package name. Fails with `InstallTimeout` if the
    /// service has not converged within the install bound.
    pub fn install(&self, package: &PackageRef, options: &InstallOptions) -> Result<ServiceHandle> {
        let service = options
            .service_name()
            .unwrap_or_else(|| package.default_service_name())
            .to_string();
        let mut handle = ServiceHandle::pending(&package.name, &service);

        self.api.install(&package.name, options)?;

        let registry = self.registry();
        let deadline = Instant::now() + self.timing.install_timeout;
        loop {
            if handle.status == ServiceStatus::Pending && registry.is_installed(&package.name)? {
                handle.status = ServiceStatus::Registered;
            }
            if handle.status == ServiceStatus::Registered && registry.is_healthy(&service)? {
                handle.status = ServiceStatus::Healthy;
                break;
            }
            if Instant::now() >= deadline {
                return Err(install_timeout(
                    &service,
                    self.timing.install_timeout.as_secs(),
                ));
            }
            std::thread::sleep(self.timing.poll_interval);
        }

        self.waiter().wait()?;
        Ok(handle)
    }

    /// Install under an explicit `service.name` identity and wait until
    /// the configured identity answers on its endpoint.
    pub fn install_with_custom_identity(
        &self,
        package: &PackageRef,
        service_name: &str,
    ) -> Result<ServiceHandle> {
        let options = InstallOptions::new().with_service_name(service_name);
        let handle = self.install(package, &options)?;
        let reachable = self
            .registry()
            .wait_for_endpoint(service_name, self.timing.endpoint_timeout)?;
        if !reachable {
            return Err(health_check_failed(
                service_name,
                "endpoint never became reachable under the configured identity",
            ));
        }
        Ok(handle)
    }

    /// Assert that the cluster manager rejects an install of an identity
    /// that is already deployed.
    ///
    /// Any rejection from the manager is the expected outcome. A manager
    /// that silently accepts the duplicate is the failure mode here.
    pub fn reject_duplicate_install(&self, package: &PackageRef) -> Result<()> {
        match self.api.install(&package.name, &InstallOptions::new()) {
            Err(_) => Ok(()),
            Ok(_) => Err(duplicate_install_accepted(&package.name)),
        }
    }

    /// Verify a running service with the strategy its package supports.
    ///
    /// `Standard` trusts the framework's aggregate health report.
    /// `DeepTask` enumerates tasks under a prefix and checks each task's
    /// health results individually; packages that do not answer the
    /// framework protocol need this path.
    pub fn verify(&self, service: &str, strategy: &HealthStrategy) -> Result<()> {
        match strategy {
            HealthStrategy::Standard => {
                if self.registry().is_healthy(service)? {
                    Ok(())
                } else {
                    Err(health_check_failed(
                        service,
                        "service does not report healthy",
                    ))
                }
            }
            HealthStrategy::DeepTask { prefix } => {
                let tasks = self.registry().get_tasks(prefix)?;
                if tasks.is_empty() {
                    return Err(health_check_failed(
                        service,
                        format!("no tasks found under prefix '{prefix}'"),
                    ));
                }
                for task in &tasks {
                    Self::check_task(service, task)?;
                }
                Ok(())
            }
        }
    }

    /// Install, then verify each task under `task_prefix` individually
    pub fn install_then_verify_framework_health(
        &self,
        package: &PackageRef,
        task_prefix: &str,
    ) -> Result<ServiceHandle> {
        let handle = self.install(package, &InstallOptions::new())?;
        self.verify(
            &handle.service_name,
            &HealthStrategy::DeepTask {
                prefix: task_prefix.to_string(),
            },
        )?;
        Ok(handle)
    }

    /// Uninstall a service installed from `package`.
    ///
    /// Idempotent: when no task exists for the identity there is nothing
    /// to remove and the call succeeds. Otherwise removes all instances,
    /// drains deployments, confirms the endpoint has stopped answering
    /// and deletes the service's registry node.
    pub fn uninstall(&self, package: &str, service: &str) -> Result<()> {
        if self.registry().get_task(package, service)?.is_none() {
            return Ok(());
        }

        let package_ref = PackageRef::new(package, None::<String>);
        self.catalog().uninstall(&package_ref, true, service)?;
        self.waiter().wait()?;

        let removed = self
            .registry()
            .wait_for_endpoint_removal(service, self.timing.endpoint_timeout)?;
        if !removed {
            return Err(endpoint_still_reachable(service));
        }

        self.api.delete_node(&format!("/universe/{service}"))?;
        Ok(())
    }

    /// Uninstall and additionally purge the package's persistent data
    /// under its derived storage namespace.
    pub fn uninstall_and_purge(&self, package: &str, service: &str) -> Result<()> {
        self.uninstall(package, service)?;
        self.api
            .delete_persistent_data(&format!("{package}-role"), &format!("dcos-service-{package}"))
    }

    /// Best-effort teardown: reports failures to stderr and swallows
    /// them, so cleanup can never mask the primary outcome.
    pub fn cleanup(&self, package: &str, service: &str) {
        if let Err(err) = self.uninstall_and_purge(package, service) {
            eprintln!("Warning: cleanup of service '{service}' failed: {err}");
        }
    }

    fn check_task(service: &str, task: &TaskHandle) -> Result<()> {
        if task.health_check_results.is_empty() {
            return Err(health_check_failed(
                service,
                format!("task '{}' exposes no health checks", task.id),
            ));
        }
        if !task.is_healthy() {
            return Err(health_check_failed(
                service,
                format!("task '{}' is failing its health checks", task.id),
            ));
        }
        Ok(())
    }
}
