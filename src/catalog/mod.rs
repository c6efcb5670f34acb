//! Package catalog client
//!
//! Thin wrapper over the catalog API: resolves names to installable
//! package descriptors and issues removals.

use crate::cluster::CatalogApi;
use crate::domain::PackageRef;
use crate::error::Result;

/// Client for the cluster's package catalog
pub struct PackageCatalogClient<'a, C> {
    api: &'a C,
}

impl<'a, C: CatalogApi> PackageCatalogClient<'a, C> {
    pub fn new(api: &'a C) -> Self {
        Self { api }
    }

    /// Resolve a package name (+ optional version) to a catalog entry
    pub fn resolve(&self, name: &str, version: Option<&str>) -> Result<PackageRef> {
        self.api.resolve_package(name, version)
    }

    /// Remove one or all instances of a service installed from `package`.
    ///
    /// Propagates `RemovalRejected`; teardown paths catch it, primary
    /// paths treat it as fatal.
    pub fn uninstall(&self, package: &PackageRef, all: bool, service: &str) -> Result<()> {
        self.api.uninstall_app(&package.name, all, service)
    }
}
