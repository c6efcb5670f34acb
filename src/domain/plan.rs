//! Deployment plan types
//!
//! Plans are owned by the cluster manager; the orchestrator only observes
//! them through the deployment waiter.

use serde::{Deserialize, Serialize};

/// Terminal or in-flight state of a deployment plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanStatus {
    Active,
    Completed,
    Failed,
}

impl PlanStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, PlanStatus::Active)
    }
}

impl std::fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PlanStatus::Active => "active",
            PlanStatus::Completed => "completed",
            PlanStatus::Failed => "failed",
        };
        write!(f, "{label}")
    }
}

/// The cluster manager's record of an in-progress change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentPlan {
    pub id: String,
    pub status: PlanStatus,
}
