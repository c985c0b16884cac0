//! Enterprise OS feed configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_base_url() -> String {
    "https://infrastructure.fedoraproject.org/repo/json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedConfig {
    /// Base URL the per-release `pkg_el<N>.json` documents live under.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Directory for the daily cache files. Defaults to the platform temp
    /// directory when unset.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
}

impl FeedConfig {
    /// Resolved cache directory.
    #[must_use]
    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            cache_dir: None,
        }
    }
}
