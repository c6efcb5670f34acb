use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install the latest catalog version:\n    stevedore install marathon\n\n\
                   Pin a catalog version:\n    stevedore install cassandra --package-version 2.3.0\n\n\
                   Install under a custom service identity:\n    stevedore install marathon --name test-marathon\n\n\
                   Override package options:\n    stevedore install cassandra --set nodes.count=4\n\n\
                   Verify every task under a prefix after install:\n    stevedore install neo4j --verify-tasks neo4j/core")]
pub struct InstallArgs {
    /// Catalog package to install
    pub package: String,

    /// Catalog version to install (defaults to the latest)
    #[arg(long = "package-version", value_name = "VERSION")]
    pub package_version: Option<String>,

    /// Deployed service identity (sets the service.name option)
    #[arg(long, short = 'n', value_name = "SERVICE")]
    pub name: Option<String>,

    /// Package option overrides as dotted-path pairs (e.g. nodes.count=4)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// After install, verify each task under this prefix individually
    #[arg(long = "verify-tasks", value_name = "PREFIX")]
    pub verify_tasks: Option<String>,
}
