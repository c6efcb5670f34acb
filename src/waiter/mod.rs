//! Deployment plan draining
//!
//! Blocks the calling flow until every deployment plan the cluster
//! manager reports has reached a terminal state. This is a polling loop
//! with a fixed short interval, not an event subscription: deployment
//! completion is not a hard-realtime concern, so bounded staleness is
//! acceptable in exchange for simplicity.

use std::time::{Duration, Instant};

use crate::cluster::ClusterApi;
use crate::domain::PlanStatus;
use crate::error::{Result, deployment_timeout};

/// Waits for in-flight deployment plans to settle
pub struct DeploymentWaiter<'a, C> {
    api: &'a C,
    poll_interval: Duration,
    default_timeout: Duration,
}

impl<'a, C: ClusterApi> DeploymentWaiter<'a, C> {
    pub fn new(api: &'a C, poll_interval: Duration, default_timeout: Duration) -> Self {
        Self {
            api,
            poll_interval,
            default_timeout,
        }
    }

    /// Wait with the configured default timeout
    pub fn wait(&self) -> Result<()> {
        self.wait_for(self.default_timeout)
    }

    /// Wait until all plans are Completed or Failed, or `timeout` elapses.
    /// Fails with `DeploymentTimeout` if any plan is still Active at the bound.
    pub fn wait_for(&self, timeout: Duration) -> Result<()> {
        let started = Instant::now();
        let deadline = started + timeout;
        loop {
            let active = self
                .api
                .list_plans()?
                .into_iter()
                .filter(|plan| plan.status == PlanStatus::Active)
                .count();
            if active == 0 {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(deployment_timeout(started.elapsed().as_secs(), active));
            }
            std::thread::sleep(self.poll_interval);
        }
    }
}
