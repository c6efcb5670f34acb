//! Plans command implementation

use std::path::Path;

use console::style;

use crate::cli::PlansArgs;
use crate::cluster::ClusterApi;
use crate::error::Result;
use crate::progress::WaitSpinner;

/// Run plans command
pub fn run(config: Option<&Path>, cluster_cmd: Option<&str>, args: PlansArgs) -> Result<()> {
    let orchestrator = super::orchestrator(config, cluster_cmd)?;

    if args.wait {
        let spinner = WaitSpinner::start("Waiting for deployment plans to settle...");
        if let Err(e) = orchestrator.waiter().wait() {
            spinner.clear();
            return Err(e);
        }
        spinner.finish("All deployment plans settled");
        return Ok(());
    }

    let plans = orchestrator.api().list_plans()?;
    if plans.is_empty() {
        println!("No deployment plans");
        return Ok(());
    }
    for plan in plans {
        println!("{:<10} {}", style(plan.status.to_string()).bold(), plan.id);
    }
    Ok(())
}
