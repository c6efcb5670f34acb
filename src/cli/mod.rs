//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - uninstall: Uninstall command arguments
//! - status: Status command arguments
//! - verify: Verify command arguments
//! - plans: Plans command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod plans;
pub mod status;
pub mod uninstall;
pub mod verify;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use plans::PlansArgs;
pub use status::StatusArgs;
pub use uninstall::UninstallArgs;
pub use verify::VerifyArgs;

/// Stevedore - package lifecycle orchestrator
///
/// Installs, health-verifies and tears down catalog packages against a
/// cluster manager by driving its command-line client.
#[derive(Parser, Debug)]
#[command(
    name = "stevedore",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Lean lifecycle orchestrator for cluster catalog packages",
    long_about = "Stevedore installs catalog packages on a cluster manager, waits for them to \
                  register and become healthy, verifies per-task health where the framework \
                  protocol is not available, and tears services down including their persistent \
                  data and registry nodes.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  stevedore install marathon                      \x1b[90m# Install and wait for health\x1b[0m\n   \
                  stevedore install marathon --name test-marathon \x1b[90m# Install under a custom identity\x1b[0m\n   \
                  stevedore install neo4j --verify-tasks neo4j/core \x1b[90m# Verify each task individually\x1b[0m\n   \
                  stevedore uninstall cassandra --purge           \x1b[90m# Remove and purge persistent data\x1b[0m\n   \
                  stevedore status marathon                       \x1b[90m# Show registration and health\x1b[0m\n   \
                  stevedore plans                                 \x1b[90m# List in-flight deployment plans\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to the standard lookup order)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Cluster CLI to drive, overriding the configured one
    #[arg(long, global = true, env = "STEVEDORE_CLUSTER_CMD")]
    pub cluster_cmd: Option<String>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install a catalog package and wait until it is healthy
    Install(InstallArgs),

    /// Remove a service and optionally purge its persistent data
    Uninstall(UninstallArgs),

    /// Show registration and health state of a service
    Status(StatusArgs),

    /// Verify the health of a running service
    Verify(VerifyArgs),

    /// List in-flight deployment plans
    Plans(PlansArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
