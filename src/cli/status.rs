use clap::Parser;

/// Arguments for the status command
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Catalog package the service was installed from
    pub package: String,

    /// Deployed service identity (defaults to the package name)
    #[arg(long, short = 'n', value_name = "SERVICE")]
    pub name: Option<String>,
}

impl StatusArgs {
    pub fn service_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.package)
    }
}
