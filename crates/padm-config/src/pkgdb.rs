//! Package database endpoint configuration.

use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "https://admin.fedoraproject.org/pkgdb".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PkgDbConfig {
    /// Base URL of the package database API.
    #[serde(default = "default_url")]
    pub url: String,
}

impl Default for PkgDbConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
        }
    }
}
