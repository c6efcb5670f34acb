//! Cluster CLI adapter
//!
//! Drives an external cluster command-line client (`dcos`-style) with
//! `std::process::Command` and parses its JSON replies. The CLI binary is
//! configurable so tests can point it at a stub.
//!
//! Conventions expected from the CLI:
//! - JSON on stdout for queries, human-readable errors on stderr
//! - non-zero exit for rejected requests
//! - `service show` exits non-zero when the service is not registered

use std::process::Command;

use crate::cluster::{CatalogApi, ClusterApi, ServiceDescriptor};
use crate::domain::{DeploymentPlan, InstallOptions, PackageRef, TaskHandle};
use crate::error::{
    Result, cluster_command_failed, package_not_found, removal_rejected, response_parse_failed,
};

/// Cluster manager client backed by an external CLI
#[derive(Debug, Clone)]
pub struct CliCluster {
    /// Program name or path of the cluster CLI
    program: String,
}

/// Outcome of one CLI invocation
struct CliReply {
    success: bool,
    stdout: String,
    stderr: String,
}

impl CliCluster {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run one CLI subcommand, capturing output.
    ///
    /// A spawn failure (missing binary, permissions) is an error; a clean
    /// run with non-zero exit is a `CliReply` the caller interprets, since
    /// several subcommands use the exit code as the answer.
    fn run(&self, args: &[&str]) -> Result<CliReply> {
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| {
                cluster_command_failed(self.describe(args), format!("failed to spawn: {e}"))
            })?;

        Ok(CliReply {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// Run a subcommand that must succeed
    fn run_checked(&self, args: &[&str]) -> Result<CliReply> {
        let reply = self.run(args)?;
        if !reply.success {
            return Err(cluster_command_failed(
                self.describe(args),
                reply.stderr.trim().to_string(),
            ));
        }
        Ok(reply)
    }

    /// Parse a subcommand's stdout as JSON
    fn query<T: serde::de::DeserializeOwned>(&self, args: &[&str]) -> Result<T> {
        let reply = self.run_checked(args)?;
        serde_json::from_str(&reply.stdout)
            .map_err(|e| response_parse_failed(self.describe(args), e.to_string()))
    }

    fn describe(&self, args: &[&str]) -> String {
        format!("{} {}", self.program, args.join(" "))
    }
}

impl ClusterApi for CliCluster {
    fn install(&self, package: &str, options: &InstallOptions) -> Result<String> {
        let options_json;
        let mut args = vec!["package", "install", package, "--yes"];
        if !options.is_empty() {
            options_json = options.to_json().to_string();
            args.push("--options-json");
            args.push(&options_json);
        }

        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct InstallReply {
            deployment_id: String,
        }

        let reply: InstallReply = self.query(&args)?;
        Ok(reply.deployment_id)
    }

    fn get_service(&self, name: &str) -> Result<Option<ServiceDescriptor>> {
        let args = ["service", "show", name];
        let reply = self.run(&args)?;
        if !reply.success {
            // Not registered (yet)
            return Ok(None);
        }
        let descriptor = serde_json::from_str(&reply.stdout)
            .map_err(|e| response_parse_failed(self.describe(&args), e.to_string()))?;
        Ok(Some(descriptor))
    }

    fn get_service_task(&self, package: &str, service: &str) -> Result<Option<TaskHandle>> {
        let args = ["task", "show", "--package", package, service];
        let reply = self.run(&args)?;
        if !reply.success {
            return Ok(None);
        }
        let task = serde_json::from_str(&reply.stdout)
            .map_err(|e| response_parse_failed(self.describe(&args), e.to_string()))?;
        Ok(Some(task))
    }

    fn get_tasks(&self, prefix: &str) -> Result<Vec<TaskHandle>> {
        self.query(&["task", "list", prefix])
    }

    fn list_plans(&self) -> Result<Vec<DeploymentPlan>> {
        self.query(&["deployment", "list"])
    }

    fn endpoint_reachable(&self, service: &str) -> Result<bool> {
        // Exit code is the answer here
        let reply = self.run(&["endpoint", "check", service])?;
        Ok(reply.success)
    }

    fn delete_node(&self, path: &str) -> Result<()> {
        self.run_checked(&["registry", "delete", path])?;
        Ok(())
    }

    fn delete_persistent_data(&self, role: &str, namespace: &str) -> Result<()> {
        self.run_checked(&["data", "purge", "--role", role, "--namespace", namespace])?;
        Ok(())
    }
}

impl CatalogApi for CliCluster {
    fn resolve_package(&self, name: &str, version: Option<&str>) -> Result<PackageRef> {
        let mut args = vec!["package", "describe", name];
        if let Some(v) = version {
            args.push("--package-version");
            args.push(v);
        }

        let reply = self.run(&args)?;
        if !reply.success {
            return Err(package_not_found(name, version));
        }

        #[derive(serde::Deserialize)]
        struct DescribeReply {
            name: String,
            version: Option<String>,
        }

        let describe: DescribeReply = serde_json::from_str(&reply.stdout)
            .map_err(|e| response_parse_failed(self.describe(&args), e.to_string()))?;
        Ok(PackageRef::new(describe.name, describe.version))
    }

    fn uninstall_app(&self, package: &str, all: bool, service: &str) -> Result<()> {
        let mut args = vec!["package", "uninstall", package, "--app-id", service];
        if all {
            args.push("--all");
        }

        let reply = self.run(&args)?;
        if !reply.success {
            return Err(removal_rejected(service, reply.stderr.trim().to_string()));
        }
        Ok(())
    }
}
