//! Common test utilities for Stevedore integration tests

#![allow(dead_code)]

#[cfg(unix)]
use std::path::PathBuf;

#[cfg(unix)]
use tempfile::TempDir;

/// A stub cluster CLI for integration tests.
///
/// Writes a shell script that answers the subcommand protocol with
/// canned JSON and keeps install state in files next to the script, so
/// lifecycle flows (install, status, uninstall) behave across
/// invocations.
#[cfg(unix)]
pub struct StubCluster {
    pub temp: TempDir,
    pub program: PathBuf,
}

#[cfg(unix)]
const STUB_SCRIPT: &str = r#"#!/bin/sh
# Stub cluster CLI. State lives next to the script.
DIR="$(dirname "$0")"
STATE="$DIR/state"
mkdir -p "$STATE"

case "$1" in
  package)
    case "$2" in
      describe)
        if [ -f "$DIR/catalog/$3" ]; then
          cat "$DIR/catalog/$3"
        else
          echo "package '$3' not found" >&2
          exit 1
        fi
        ;;
      install)
        if [ ! -f "$DIR/catalog/$3" ]; then
          echo "package '$3' not found" >&2
          exit 1
        fi
        if [ -f "$STATE/installed_$3" ]; then
          echo "service '$3' already installed" >&2
          exit 1
        fi
        touch "$STATE/installed_$3"
        echo '{"deploymentId": "deploy-1"}'
        ;;
      uninstall)
        if [ -f "$STATE/installed_$3" ]; then
          rm "$STATE/installed_$3"
        else
          echo "service '$3' not installed" >&2
          exit 1
        fi
        ;;
    esac
    ;;
  service)
    if [ -f "$STATE/installed_$3" ]; then
      printf '{"name":"%s","healthy":true,"tasksRunning":1}\n' "$3"
    else
      exit 1
    fi
    ;;
  task)
    case "$2" in
      show)
        # task show --package <pkg> <service>
        if [ -f "$STATE/installed_$5" ]; then
          printf '{"id":"%s.instance-0","healthCheckResults":[{"lastSuccess":"2016-05-03T17:41:53.460Z","consecutiveFailures":0}]}\n' "$5"
        else
          exit 1
        fi
        ;;
      list)
        printf '[{"id":"%s-0","healthCheckResults":[{"lastSuccess":"2016-05-03T17:41:53.460Z","consecutiveFailures":0}]}]\n' "$3"
        ;;
    esac
    ;;
  deployment)
    echo '[]'
    ;;
  endpoint)
    # endpoint check <service>: exit code is the answer
    [ -f "$STATE/installed_$3" ]
    ;;
  registry)
    echo "$3" >> "$STATE/deleted_nodes"
    ;;
  data)
    echo "$4 $6" >> "$STATE/purged"
    ;;
  *)
    echo "unknown subcommand: $*" >&2
    exit 1
    ;;
esac
"#;

#[cfg(unix)]
impl StubCluster {
    pub fn new() -> Self {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("Failed to create temp directory");
        let program = temp.path().join("cluster-cli");
        std::fs::write(&program, STUB_SCRIPT).expect("Failed to write stub script");
        std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make stub executable");
        std::fs::create_dir_all(temp.path().join("catalog")).expect("Failed to create catalog");
        Self { temp, program }
    }

    /// Add a catalog entry the stub's `package describe` will serve
    pub fn add_package(&self, name: &str, version: &str) {
        let entry = format!(r#"{{"name":"{name}","version":"{version}"}}"#);
        std::fs::write(self.temp.path().join("catalog").join(name), entry)
            .expect("Failed to write catalog entry");
    }

    /// Registry nodes the stub was asked to delete
    pub fn deleted_nodes(&self) -> String {
        std::fs::read_to_string(self.temp.path().join("state").join("deleted_nodes"))
            .unwrap_or_default()
    }

    /// role/namespace pairs the stub was asked to purge
    pub fn purged(&self) -> String {
        std::fs::read_to_string(self.temp.path().join("state").join("purged"))
            .unwrap_or_default()
    }

    /// A stevedore command wired to this stub
    pub fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = stevedore_cmd();
        cmd.args(["--cluster-cmd", &self.program.display().to_string()]);
        cmd
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn stevedore_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("stevedore").unwrap()
}
