//! Error types and handling for Stevedore
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`catalog`]: Package catalog errors
//! - [`cluster`]: Cluster manager client errors
//! - [`lifecycle`]: Lifecycle operation errors
//! - [`config`]: Configuration errors

#![allow(dead_code)]

// Declare submodules
pub mod catalog;
pub mod cluster;
pub mod config;
pub mod lifecycle;

// Re-export convenience constructors from submodules
#[allow(unused_imports)]
pub use catalog::not_found as package_not_found;
#[allow(unused_imports)]
pub use cluster::{
    command_failed as cluster_command_failed, parse_failed as response_parse_failed,
};
#[allow(unused_imports)]
pub use config::{not_found as config_not_found, parse_failed as config_parse_failed};
#[allow(unused_imports)]
pub use lifecycle::{
    deployment_timeout, duplicate_accepted as duplicate_install_accepted,
    endpoint_still_reachable, health_check_failed, install_timeout, removal_rejected,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Stevedore operations
#[derive(Error, Diagnostic, Debug)]
pub enum StevedoreError {
    // Catalog errors
    #[error("Package '{name}' not found in catalog{}", version.as_deref().map(|v| format!(" (version {v})")).unwrap_or_default())]
    #[diagnostic(
        code(stevedore::catalog::not_found),
        help("Check that the package name and version exist in the cluster's catalog")
    )]
    PackageNotFound {
        name: String,
        version: Option<String>,
    },

    // Lifecycle errors
    #[error("Service '{service}' did not become registered and healthy within {waited_secs}s")]
    #[diagnostic(
        code(stevedore::lifecycle::install_timeout),
        help("Inspect the cluster manager's deployment log for the failing service")
    )]
    InstallTimeout { service: String, waited_secs: u64 },

    #[error("{pending} deployment plan(s) still active after {waited_secs}s")]
    #[diagnostic(
        code(stevedore::lifecycle::deployment_timeout),
        help("A plan stuck in the Active state usually means the cluster lacks resources")
    )]
    DeploymentTimeout { waited_secs: u64, pending: usize },

    #[error("Cluster manager rejected removal of service '{service}': {reason}")]
    #[diagnostic(code(stevedore::lifecycle::removal_rejected))]
    RemovalRejected { service: String, reason: String },

    #[error("Duplicate install of package '{package}' was accepted by the cluster manager")]
    #[diagnostic(
        code(stevedore::lifecycle::duplicate_accepted),
        help(
            "Installing an already-installed service identity must be rejected with a non-zero outcome"
        )
    )]
    DuplicateInstallAccepted { package: String },

    #[error("Endpoint for service '{service}' is still reachable after uninstall")]
    #[diagnostic(code(stevedore::lifecycle::endpoint_still_reachable))]
    EndpointStillReachable { service: String },

    #[error("Health verification failed for '{service}': {reason}")]
    #[diagnostic(code(stevedore::lifecycle::health_check_failed))]
    HealthCheckFailed { service: String, reason: String },

    // Cluster client errors
    #[error("Cluster command '{command}' failed: {reason}")]
    #[diagnostic(
        code(stevedore::cluster::command_failed),
        help("Check that the configured cluster CLI is installed and the cluster is reachable")
    )]
    ClusterCommandFailed { command: String, reason: String },

    #[error("Failed to parse reply from '{command}': {reason}")]
    #[diagnostic(code(stevedore::cluster::parse_failed))]
    ResponseParseFailed { command: String, reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(stevedore::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(stevedore::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // CLI argument errors
    #[error("Invalid option override '{value}': expected key=value")]
    #[diagnostic(
        code(stevedore::cli::invalid_override),
        help("Pass overrides as dotted-path pairs, e.g. --set service.name=test-marathon")
    )]
    InvalidOverride { value: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(stevedore::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for StevedoreError {
    fn from(err: std::io::Error) -> Self {
        StevedoreError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for StevedoreError {
    fn from(err: serde_yaml::Error) -> Self {
        StevedoreError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for StevedoreError {
    fn from(err: serde_json::Error) -> Self {
        StevedoreError::ResponseParseFailed {
            command: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, StevedoreError>;
