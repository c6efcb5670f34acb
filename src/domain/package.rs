//! Package identity and install-time configuration

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A resolved catalog entry. Immutable once resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRef {
    /// Catalog package name
    pub name: String,
    /// Resolved version, when the catalog pins one
    pub version: Option<String>,
}

impl PackageRef {
    pub fn new(name: impl Into<String>, version: Option<impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            version: version.map(Into::into),
        }
    }

    /// Default deployed identity when no `service.name` override is given
    pub fn default_service_name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for PackageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}@{}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Configuration overrides applied at install time.
///
/// Keys are dotted paths into the package's options document, so
/// `service.name` becomes `{"service": {"name": ...}}` on the wire.
/// Immutable per install call once handed to the orchestrator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstallOptions {
    root: Map<String, Value>,
}

impl InstallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a dotted-path key to a JSON value, creating nested objects as needed
    #[must_use]
    pub fn set(mut self, path: &str, value: impl Into<Value>) -> Self {
        let mut segments = path.split('.').peekable();
        let mut node = &mut self.root;
        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                node.insert(segment.to_string(), value.into());
                break;
            }
            let child = node
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            // A scalar in the middle of the path is replaced by an object
            if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            let Value::Object(map) = child else {
                break;
            };
            node = map;
        }
        self
    }

    /// Override the deployed service identity (`service.name`)
    #[must_use]
    pub fn with_service_name(self, name: &str) -> Self {
        self.set("service.name", name)
    }

    /// The configured service identity, when one was set
    pub fn service_name(&self) -> Option<&str> {
        self.root
            .get("service")
            .and_then(|s| s.get("name"))
            .and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Serialize to the JSON document the cluster manager expects
    pub fn to_json(&self) -> Value {
        Value::Object(self.root.clone())
    }
}
