//! Identity service (account system) configuration.

use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "https://admin.fedoraproject.org/accounts".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FasConfig {
    /// Base URL of the account system API.
    #[serde(default = "default_url")]
    pub url: String,

    /// Username to authenticate as. The password is never stored in config;
    /// it is prompted for on the first authentication failure.
    #[serde(default)]
    pub username: Option<String>,
}

impl Default for FasConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            username: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FasConfig;

    #[test]
    fn default_has_no_username() {
        let config = FasConfig::default();
        assert_eq!(config.url, "https://admin.fedoraproject.org/accounts");
        assert!(config.username.is_none());
    }
}
