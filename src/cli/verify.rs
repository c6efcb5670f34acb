use clap::Parser;

/// Arguments for the verify command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Verify via the framework health protocol:\n    stevedore verify marathon\n\n\
                   Verify each task under a prefix individually:\n    stevedore verify neo4j --tasks neo4j/core")]
pub struct VerifyArgs {
    /// Deployed service identity to verify
    pub service: String,

    /// Inspect every task under this prefix instead of the aggregate report
    #[arg(long = "tasks", value_name = "PREFIX")]
    pub task_prefix: Option<String>,
}
