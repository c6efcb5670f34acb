//! Verify command implementation

use std::path::Path;

use console::style;

use crate::cli::VerifyArgs;
use crate::domain::HealthStrategy;
use crate::error::Result;

/// Run verify command
pub fn run(config: Option<&Path>, cluster_cmd: Option<&str>, args: VerifyArgs) -> Result<()> {
    let orchestrator = super::orchestrator(config, cluster_cmd)?;

    let strategy = match args.task_prefix {
        Some(prefix) => HealthStrategy::DeepTask { prefix },
        None => HealthStrategy::Standard,
    };
    orchestrator.verify(&args.service, &strategy)?;

    println!(
        "{} Service '{}' is healthy",
        style("✓").green(),
        args.service
    );
    Ok(())
}
