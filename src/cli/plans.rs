use clap::Parser;

/// Arguments for the plans command
#[derive(Parser, Debug)]
pub struct PlansArgs {
    /// Block until every plan has reached a terminal state
    #[arg(long)]
    pub wait: bool,
}
