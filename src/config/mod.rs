//! Orchestrator configuration
//!
//! An explicit configuration struct passed into the orchestrator at
//! construction, loaded from a YAML file. Lookup order: `--config` flag,
//! `STEVEDORE_CONFIG` environment variable, then
//! `<config dir>/stevedore/config.yaml`. When no file exists at the
//! default location, built-in defaults apply; an explicitly named file
//! that is missing is an error.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StevedoreError, config_not_found, config_parse_failed};

/// Default bound for install registration+health polling (seconds)
const DEFAULT_INSTALL_TIMEOUT_SECS: u64 = 300;
/// Default bound for deployment plan draining (seconds)
const DEFAULT_DEPLOY_TIMEOUT_SECS: u64 = 300;
/// Default bound for endpoint reachability polling (seconds)
const DEFAULT_ENDPOINT_TIMEOUT_SECS: u64 = 120;
/// Fixed short polling interval (seconds)
const DEFAULT_POLL_INTERVAL_SECS: u64 = 1;

/// On-disk configuration (config.yaml)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StevedoreConfig {
    /// Program name or path of the cluster CLI to drive
    #[serde(default = "default_cluster_cmd")]
    pub cluster_cmd: String,

    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    #[serde(default = "default_install_timeout_secs")]
    pub install_timeout_secs: u64,

    #[serde(default = "default_deploy_timeout_secs")]
    pub deploy_timeout_secs: u64,

    #[serde(default = "default_endpoint_timeout_secs")]
    pub endpoint_timeout_secs: u64,
}

fn default_cluster_cmd() -> String {
    "dcos".to_string()
}

fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

fn default_install_timeout_secs() -> u64 {
    DEFAULT_INSTALL_TIMEOUT_SECS
}

fn default_deploy_timeout_secs() -> u64 {
    DEFAULT_DEPLOY_TIMEOUT_SECS
}

fn default_endpoint_timeout_secs() -> u64 {
    DEFAULT_ENDPOINT_TIMEOUT_SECS
}

impl Default for StevedoreConfig {
    fn default() -> Self {
        Self {
            cluster_cmd: default_cluster_cmd(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            install_timeout_secs: DEFAULT_INSTALL_TIMEOUT_SECS,
            deploy_timeout_secs: DEFAULT_DEPLOY_TIMEOUT_SECS,
            endpoint_timeout_secs: DEFAULT_ENDPOINT_TIMEOUT_SECS,
        }
    }
}

impl StevedoreConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| config_parse_failed("config.yaml", e.to_string()))
    }

    /// Load configuration from a file path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(config_not_found(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path).map_err(|e| StevedoreError::IoError {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        serde_yaml::from_str(&content)
            .map_err(|e| config_parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Load configuration with the documented lookup order.
    ///
    /// `explicit` comes from `--config`; a missing explicit file is an
    /// error, a missing default-location file falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        if let Ok(env_path) = std::env::var("STEVEDORE_CONFIG") {
            return Self::load_from(&PathBuf::from(env_path));
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Default config file location under the user's config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("stevedore").join("config.yaml"))
    }

    /// Timeouts and intervals for the orchestrator's polling discipline
    pub fn timing(&self) -> PollTiming {
        PollTiming {
            poll_interval: Duration::from_secs(self.poll_interval_secs),
            install_timeout: Duration::from_secs(self.install_timeout_secs),
            deploy_timeout: Duration::from_secs(self.deploy_timeout_secs),
            endpoint_timeout: Duration::from_secs(self.endpoint_timeout_secs),
        }
    }
}

/// Polling discipline handed to the orchestrator.
///
/// Every blocking operation is bounded by one of these; there is no
/// unbounded wait anywhere in the lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollTiming {
    pub poll_interval: Duration,
    pub install_timeout: Duration,
    pub deploy_timeout: Duration,
    pub endpoint_timeout: Duration,
}

impl Default for PollTiming {
    fn default() -> Self {
        StevedoreConfig::default().timing()
    }
}
