//! # padm-config
//!
//! Layered configuration loading for pkgdb-admin using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PKGADM_*` prefix, `__` as separator)
//! 2. User-level `~/.config/pkgdb-admin/config.toml`
//! 3. Built-in defaults (the Fedora production endpoints)
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PKGADM_BUGZILLA__URL` -> `bugzilla.url`,
//! `PKGADM_FEED__CACHE_DIR` -> `feed.cache_dir`, etc. The `__` (double
//! underscore) separates nested config sections.

mod bugzilla;
mod error;
mod fas;
mod feed;
mod pkgdb;

pub use bugzilla::BugzillaConfig;
pub use error::ConfigError;
pub use fas::FasConfig;
pub use feed::FeedConfig;
pub use pkgdb::PkgDbConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PadmConfig {
    #[serde(default)]
    pub pkgdb: PkgDbConfig,
    #[serde(default)]
    pub bugzilla: BugzillaConfig,
    #[serde(default)]
    pub fas: FasConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

impl PadmConfig {
    /// Load configuration from all sources (TOML file + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if figment extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment()
            .extract()
            .map_err(ConfigError::from)
            .and_then(Self::validate)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` for the current directory before building the figment.
    /// This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if figment extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(user_path) = Self::user_config_path()
            && user_path.exists()
        {
            figment = figment.merge(Toml::file(user_path));
        }

        figment.merge(Env::prefixed("PKGADM_").split("__"))
    }

    /// Path to the user-level config file.
    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pkgdb-admin").join("config.toml"))
    }

    /// Reject endpoint values no HTTP client could use.
    fn validate(self) -> Result<Self, ConfigError> {
        let endpoints = [
            ("pkgdb.url", &self.pkgdb.url),
            ("bugzilla.url", &self.bugzilla.url),
            ("fas.url", &self.fas.url),
            ("feed.base_url", &self.feed.base_url),
        ];
        for (field, value) in endpoints {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("expected an http(s) URL, got `{value}`"),
                });
            }
        }
        Ok(self)
    }
}
