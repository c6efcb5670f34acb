//! Service registry queries
//!
//! Read-only view of current cluster state: service presence, health,
//! task enumeration and endpoint reachability. All waiting here is
//! bounded polling with a fixed short interval.

use std::time::{Duration, Instant};

use crate::cluster::ClusterApi;
use crate::domain::TaskHandle;
use crate::error::Result;

/// Queries current cluster state through the cluster API
pub struct ServiceRegistry<'a, C> {
    api: &'a C,
    poll_interval: Duration,
}

impl<'a, C: ClusterApi> ServiceRegistry<'a, C> {
    pub fn new(api: &'a C, poll_interval: Duration) -> Self {
        Self { api, poll_interval }
    }

    /// Is a service registered under this package's identity?
    pub fn is_installed(&self, package: &str) -> Result<bool> {
        Ok(self.api.get_service(package)?.is_some())
    }

    /// Aggregate service health via the framework health-check protocol.
    ///
    /// True iff the service is registered and reports healthy, meaning all
    /// of its known tasks satisfy the task-health invariant. Services that
    /// do not answer the protocol never report healthy here; they need
    /// per-task verification instead.
    pub fn is_healthy(&self, service: &str) -> Result<bool> {
        Ok(self
            .api
            .get_service(service)?
            .is_some_and(|descriptor| descriptor.healthy == Some(true)))
    }

    /// Look up a single task, used to check existence before uninstall
    pub fn get_task(&self, package: &str, service: &str) -> Result<Option<TaskHandle>> {
        self.api.get_service_task(package, service)
    }

    /// All tasks whose id starts with `prefix`, for deep health inspection
    pub fn get_tasks(&self, prefix: &str) -> Result<Vec<TaskHandle>> {
        self.api.get_tasks(prefix)
    }

    /// Poll until the service's endpoint is reachable or `timeout` elapses.
    /// Returns `false` on timeout; the caller decides whether that is fatal.
    pub fn wait_for_endpoint(&self, service: &str, timeout: Duration) -> Result<bool> {
        self.poll_endpoint(service, timeout, true)
    }

    /// Poll until the service's endpoint stops answering or `timeout`
    /// elapses. Used after uninstall to confirm the identity is gone.
    pub fn wait_for_endpoint_removal(&self, service: &str, timeout: Duration) -> Result<bool> {
        self.poll_endpoint(service, timeout, false)
    }

    fn poll_endpoint(&self, service: &str, timeout: Duration, want: bool) -> Result<bool> {
        let deadline = Instant::now() + timeout;
        loop {
            if self.api.endpoint_reachable(service)? == want {
                return Ok(true);
            }
            if Instant::now() >= deadline {
                return Ok(false);
            }
            std::thread::sleep(self.poll_interval);
        }
    }
}
