//! Bug tracker endpoint configuration.

use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "https://bugzilla.redhat.com".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BugzillaConfig {
    /// Base URL of the bug tracker (REST API lives under `/rest`).
    #[serde(default = "default_url")]
    pub url: String,

    /// API key sent with write operations (commenting). Read operations on
    /// public bugs work without one.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for BugzillaConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            api_key: None,
        }
    }
}
