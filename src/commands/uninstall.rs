//! Uninstall command implementation

use std::path::Path;

use console::style;

use crate::cli::UninstallArgs;
use crate::error::Result;
use crate::progress::WaitSpinner;

/// Run uninstall command
pub fn run(config: Option<&Path>, cluster_cmd: Option<&str>, args: UninstallArgs) -> Result<()> {
    let orchestrator = super::orchestrator(config, cluster_cmd)?;
    let service = args.service_name();

    if args.best_effort {
        orchestrator.cleanup(&args.package, service);
        println!("Best-effort cleanup of '{service}' finished");
        return Ok(());
    }

    let spinner = WaitSpinner::start(&format!("Removing service '{service}'..."));
    let result = if args.purge {
        orchestrator.uninstall_and_purge(&args.package, service)
    } else {
        orchestrator.uninstall(&args.package, service)
    };
    if let Err(e) = result {
        spinner.clear();
        return Err(e);
    }
    spinner.finish(&format!("Service '{service}' removed"));

    println!(
        "{} Uninstalled '{}'{}",
        style("✓").green(),
        service,
        if args.purge {
            " and purged persistent data"
        } else {
            ""
        }
    );
    Ok(())
}
