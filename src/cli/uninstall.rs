use clap::Parser;

/// Arguments for the uninstall command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Remove a service:\n    stevedore uninstall marathon\n\n\
                   Remove a service deployed under a custom identity:\n    stevedore uninstall marathon --name test-marathon\n\n\
                   Remove and purge persistent data:\n    stevedore uninstall cassandra --purge\n\n\
                   Best-effort teardown that never fails:\n    stevedore uninstall cassandra --best-effort")]
pub struct UninstallArgs {
    /// Catalog package the service was installed from
    pub package: String,

    /// Deployed service identity (defaults to the package name)
    #[arg(long, short = 'n', value_name = "SERVICE")]
    pub name: Option<String>,

    /// Also purge the package's persistent data after removal
    #[arg(long)]
    pub purge: bool,

    /// Swallow all removal errors; implies --purge
    #[arg(long = "best-effort")]
    pub best_effort: bool,
}

impl UninstallArgs {
    /// Deployed identity to remove
    pub fn service_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.package)
    }
}
