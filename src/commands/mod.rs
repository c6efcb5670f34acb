//! Command implementations
//!
//! Each command is a thin wrapper: load configuration, build the
//! CLI-backed cluster client and delegate to the lifecycle operations.

pub mod completions;
pub mod install;
pub mod plans;
pub mod status;
pub mod uninstall;
pub mod verify;
pub mod version;

use std::path::Path;

use crate::cluster::CliCluster;
use crate::config::StevedoreConfig;
use crate::error::Result;
use crate::orchestrator::Orchestrator;

/// Build the orchestrator all commands run against.
///
/// `cluster_cmd` (from `--cluster-cmd` or `STEVEDORE_CLUSTER_CMD`)
/// overrides the configured cluster CLI.
pub fn orchestrator(
    config_path: Option<&Path>,
    cluster_cmd: Option<&str>,
) -> Result<Orchestrator<CliCluster>> {
    let config = StevedoreConfig::load(config_path)?;
    let program = cluster_cmd.unwrap_or(&config.cluster_cmd);
    Ok(Orchestrator::new(CliCluster::new(program), config.timing()))
}
