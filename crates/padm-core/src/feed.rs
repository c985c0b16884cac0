//! Daily snapshot of an enterprise OS package set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One package in the feed: its shipped version and the architectures it is
/// built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPackage {
    pub version: String,
    pub arch: Vec<String>,
}

impl FeedPackage {
    /// Comma-joined architecture list for human-readable findings.
    #[must_use]
    pub fn arch_list(&self) -> String {
        self.arch.join(", ")
    }
}

/// The parsed feed document: package name → version/arch data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSnapshot {
    #[serde(default)]
    pub packages: BTreeMap<String, FeedPackage>,
}

impl FeedSnapshot {
    #[must_use]
    pub fn package(&self, name: &str) -> Option<&FeedPackage> {
        self.packages.get(name)
    }
}
