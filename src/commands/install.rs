//! Install command implementation

use std::path::Path;

use console::style;
use serde_json::Value;

use crate::cli::InstallArgs;
use crate::domain::{HealthStrategy, InstallOptions};
use crate::error::{Result, StevedoreError};
use crate::progress::WaitSpinner;

/// Run install command
pub fn run(config: Option<&Path>, cluster_cmd: Option<&str>, args: InstallArgs) -> Result<()> {
    let orchestrator = super::orchestrator(config, cluster_cmd)?;

    let mut options = parse_overrides(&args.overrides)?;
    if let Some(name) = &args.name {
        options = options.with_service_name(name);
    }

    let package = orchestrator
        .catalog()
        .resolve(&args.package, args.package_version.as_deref())?;
    let service = options
        .service_name()
        .unwrap_or_else(|| package.default_service_name())
        .to_string();

    let spinner = WaitSpinner::start(&format!("Installing {package} as '{service}'..."));
    // With an identity override alone, also wait for the endpoint to
    // answer under the configured name
    let identity_only = args.name.as_deref().filter(|_| args.overrides.is_empty());
    let result = match identity_only {
        Some(name) => orchestrator.install_with_custom_identity(&package, name),
        None => orchestrator.install(&package, &options),
    };
    let handle = match result {
        Ok(handle) => handle,
        Err(e) => {
            spinner.clear();
            return Err(e);
        }
    };
    spinner.finish(&format!("Service '{}' is healthy", handle.service_name));

    if let Some(prefix) = &args.verify_tasks {
        orchestrator.verify(
            &handle.service_name,
            &HealthStrategy::DeepTask {
                prefix: prefix.clone(),
            },
        )?;
        println!(
            "{} All tasks under '{}' passing health checks",
            style("✓").green(),
            prefix
        );
    }

    println!(
        "{} Installed {} as service '{}'",
        style("✓").green(),
        style(package.to_string()).bold(),
        handle.service_name
    );
    Ok(())
}

/// Parse `--set key=value` pairs into install options.
///
/// Values parse as JSON when they can (numbers, booleans, objects) and
/// fall back to plain strings.
fn parse_overrides(pairs: &[String]) -> Result<InstallOptions> {
    let mut options = InstallOptions::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(StevedoreError::InvalidOverride {
                value: pair.clone(),
            });
        };
        if key.is_empty() {
            return Err(StevedoreError::InvalidOverride {
                value: pair.clone(),
            });
        }
        let value =
            serde_json::from_str::<Value>(value).unwrap_or_else(|_| Value::String(value.to_string()));
        options = options.set(key, value);
    }
    Ok(options)
}
