//! Read-only view of a package-database entry.

use serde::{Deserialize, Serialize};

/// A package as known to the package database: its name and the collection
/// branches it already exists on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    /// Branch names of every collection the package is present in
    /// (e.g. `f30`, `el7`).
    pub branches: Vec<String>,
}

impl PackageInfo {
    /// Whether the package already exists on the given collection branch.
    #[must_use]
    pub fn has_branch(&self, branch: &str) -> bool {
        self.branches.iter().any(|existing| existing == branch)
    }
}
