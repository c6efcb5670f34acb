//! Stevedore - package lifecycle orchestrator
//!
//! A command line tool that installs catalog packages on a cluster
//! manager, waits for them to register and become healthy, verifies
//! per-task health, and tears services down including their persistent
//! data and registry nodes.

use clap::Parser;

mod catalog;
mod cli;
mod cluster;
mod commands;
mod config;
mod domain;
mod error;
mod orchestrator;
mod progress;
mod registry;
mod waiter;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let cluster_cmd = cli.cluster_cmd.as_deref();

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(config, cluster_cmd, args),
        Commands::Uninstall(args) => commands::uninstall::run(config, cluster_cmd, args),
        Commands::Status(args) => commands::status::run(config, cluster_cmd, args),
        Commands::Verify(args) => commands::verify::run(config, cluster_cmd, args),
        Commands::Plans(args) => commands::plans::run(config, cluster_cmd, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
