//! Application context: one client per remote service, built once at
//! startup and passed by reference into every check.

use padm_config::PadmConfig;
use padm_remote::{BugzillaClient, FasClient, FeedCache, PkgDbClient, PromptCredentials};

pub struct AppContext {
    pub pkgdb: PkgDbClient,
    pub bugzilla: BugzillaClient,
    pub fas: FasClient,
    pub feed: FeedCache,
    pub feed_cache_dir: std::path::PathBuf,
}

impl AppContext {
    #[must_use]
    pub fn from_config(config: &PadmConfig) -> Self {
        let feed_cache_dir = config.feed.cache_dir();
        Self {
            pkgdb: PkgDbClient::new(&config.pkgdb.url),
            bugzilla: BugzillaClient::new(&config.bugzilla.url, config.bugzilla.api_key.clone()),
            fas: FasClient::new(
                &config.fas.url,
                Box::new(PromptCredentials {
                    default_username: config.fas.username.clone(),
                }),
            ),
            feed: FeedCache::new(&config.feed.base_url, feed_cache_dir.clone()),
            feed_cache_dir,
        }
    }
}
