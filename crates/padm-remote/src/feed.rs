//! Once-daily cached enterprise OS package feed.
//!
//! The feed is a static JSON document per OS release. It changes rarely, so
//! the raw body is persisted to a date-stamped file in the cache directory
//! and re-used for the rest of the UTC day; date rollover is the only
//! invalidation. No locking: the CLI runs sequentially for a single
//! operator.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use padm_core::FeedSnapshot;

use crate::error::RemoteError;
use crate::traits::FeedSource;

/// Network seam for the feed download, so tests can count fetches.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    /// Fetch the raw feed document at `url`.
    ///
    /// # Errors
    ///
    /// [`RemoteError::NotFound`] for any non-success response (an unknown
    /// release has no document); transport errors otherwise.
    async fn fetch(&self, url: &str) -> Result<String, RemoteError>;
}

/// The production fetcher: a plain HTTP GET.
pub struct HttpFeedFetcher {
    http: reqwest::Client,
}

impl Default for HttpFeedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFeedFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            http: crate::build_http_client(),
        }
    }
}

#[async_trait]
impl FeedFetcher for HttpFeedFetcher {
    async fn fetch(&self, url: &str) -> Result<String, RemoteError> {
        let resp = self.http.get(url).send().await?;
        if !resp.status().is_success() {
            // An unknown release means the document simply does not exist.
            return Err(RemoteError::not_found(format!("feed document {url}")));
        }
        Ok(resp.text().await?)
    }
}

/// Daily file-backed cache over the per-release feed documents.
pub struct FeedCache<F = HttpFeedFetcher> {
    fetcher: F,
    base_url: String,
    cache_dir: PathBuf,
}

impl FeedCache<HttpFeedFetcher> {
    #[must_use]
    pub fn new(base_url: &str, cache_dir: PathBuf) -> Self {
        Self::with_fetcher(HttpFeedFetcher::new(), base_url, cache_dir)
    }
}

impl<F: FeedFetcher> FeedCache<F> {
    #[must_use]
    pub fn with_fetcher(fetcher: F, base_url: &str, cache_dir: PathBuf) -> Self {
        Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache_dir,
        }
    }

    /// The feed snapshot for an OS release identifier (e.g. `7`).
    ///
    /// Returns the cached copy when one was already fetched today;
    /// otherwise downloads, persists the raw body, and parses it.
    ///
    /// # Errors
    ///
    /// [`RemoteError::NotFound`] when no feed document exists for the
    /// release; parse or cache I/O errors otherwise.
    pub async fn snapshot(&self, release: &str) -> Result<FeedSnapshot, RemoteError> {
        let basename = format!("pkg_el{release}.json");
        let cache_file = self
            .cache_dir
            .join(format!("{}_{basename}", Utc::now().format("%Y%m%d")));

        if cache_file.is_file() {
            tracing::debug!(path = %cache_file.display(), "feed served from daily cache");
            return parse_feed(&std::fs::read_to_string(&cache_file)?);
        }

        let url = format!("{}/{basename}", self.base_url);
        tracing::debug!(%url, "fetching feed document");
        let body = self.fetcher.fetch(&url).await?;
        let snapshot = parse_feed(&body)?;
        std::fs::write(&cache_file, body)?;
        Ok(snapshot)
    }
}

fn parse_feed(body: &str) -> Result<FeedSnapshot, RemoteError> {
    serde_json::from_str(body).map_err(|error| RemoteError::Parse(error.to_string()))
}

#[async_trait]
impl<F: FeedFetcher> FeedSource for FeedCache<F> {
    async fn snapshot(&self, release: &str) -> Result<FeedSnapshot, RemoteError> {
        Self::snapshot(self, release).await
    }
}

/// Remove cache files older than today. Exposed for the CLI's cache
/// housekeeping; never called implicitly.
///
/// # Errors
///
/// Propagates directory-listing or file-removal failures.
pub fn prune_stale(cache_dir: &Path) -> Result<usize, RemoteError> {
    let today = Utc::now().format("%Y%m%d").to_string();
    let mut removed = 0;
    for entry in std::fs::read_dir(cache_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if name.ends_with(".json") && name.contains("_pkg_el") && !name.starts_with(&today) {
            std::fs::remove_file(entry.path())?;
            removed += 1;
        }
    }
    Ok(removed)
}
