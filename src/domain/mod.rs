//! Domain types for package lifecycle orchestration
//!
//! Contains the data model shared by the catalog client, service registry,
//! deployment waiter and orchestrator.

pub mod package;
pub mod plan;
pub mod service;

pub use package::{InstallOptions, PackageRef};
pub use plan::{DeploymentPlan, PlanStatus};
pub use service::{HealthStrategy, ServiceHandle, ServiceStatus, TaskHandle, TaskHealth};
