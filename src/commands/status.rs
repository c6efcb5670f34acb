//! Status command implementation

use std::path::Path;

use console::style;

use crate::cli::StatusArgs;
use crate::domain::ServiceStatus;
use crate::error::Result;

/// Run status command
pub fn run(config: Option<&Path>, cluster_cmd: Option<&str>, args: StatusArgs) -> Result<()> {
    let orchestrator = super::orchestrator(config, cluster_cmd)?;
    let registry = orchestrator.registry();
    let service = args.service_name();

    if !registry.is_installed(&args.package)? {
        println!(
            "{}: {}",
            style(&args.package).bold(),
            ServiceStatus::Removed
        );
        return Ok(());
    }

    let task = registry.get_task(&args.package, service)?;
    let state = if registry.is_healthy(service)? {
        ServiceStatus::Healthy
    } else if task.is_some() {
        ServiceStatus::Unhealthy
    } else {
        ServiceStatus::Registered
    };

    let state_label = match state {
        ServiceStatus::Healthy => style(state.to_string()).green(),
        _ => style(state.to_string()).red(),
    };
    println!("{}: {state_label}", style(&args.package).bold());
    println!("  Service: {service}");
    if let Some(task) = task {
        let health = if task.is_healthy() {
            "passing health checks"
        } else {
            "no passing health checks"
        };
        println!("  Task:    {} ({health})", task.id);
    }
    Ok(())
}
