//! Service traits the checks are written against.
//!
//! The concrete clients in this crate implement them; test code in
//! `padm-checks` substitutes in-memory stubs.

use async_trait::async_trait;
use padm_core::{Bug, FeedSnapshot, PackageInfo};

use crate::error::RemoteError;

/// Read access to the package database.
#[async_trait]
pub trait PackageDatabase: Send + Sync {
    /// Fetch a package and its existing collection branches by name.
    ///
    /// # Errors
    ///
    /// [`RemoteError::NotFound`] if the package does not exist; transport
    /// errors otherwise.
    async fn package(&self, name: &str) -> Result<PackageInfo, RemoteError>;
}

/// Read access to the bug tracker.
#[async_trait]
pub trait BugTracker: Send + Sync {
    /// Fetch the full bug record: summary, creator, flags, comments.
    ///
    /// # Errors
    ///
    /// [`RemoteError::NotFound`] if the bug does not exist; transport errors
    /// otherwise.
    async fn bug(&self, id: u64) -> Result<Bug, RemoteError>;
}

/// Packager-status lookups against the identity service.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Whether `user` (a username, or an email when it contains `@`) holds an
    /// approved packager role. An unknown account is `false`, not an error.
    ///
    /// # Errors
    ///
    /// Transport errors, or [`RemoteError::Auth`] when re-authentication
    /// fails a second time.
    async fn is_packager(&self, user: &str) -> Result<bool, RemoteError>;
}

/// Access to the per-release enterprise OS package feed.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// The feed snapshot for an OS release identifier (e.g. `7`).
    ///
    /// # Errors
    ///
    /// [`RemoteError::NotFound`] if no feed document exists for the release;
    /// transport or cache I/O errors otherwise.
    async fn snapshot(&self, release: &str) -> Result<FeedSnapshot, RemoteError>;
}
