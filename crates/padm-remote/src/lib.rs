//! # padm-remote
//!
//! HTTP clients for the remote services the review checks consult:
//! - the package database (`pkgdb`),
//! - the bug tracker REST API (`bugzilla`),
//! - the account/identity service (`fas`), with one interactive
//!   re-authentication on auth failure,
//! - the once-daily cached enterprise OS feed (`feed`).
//!
//! Every client is constructed once at startup and passed by reference into
//! the checks. The checks depend on the service traits in [`traits`], not on
//! the concrete clients, so tests can inject stubs.

pub mod bugzilla;
pub mod fas;
pub mod feed;
pub mod pkgdb;
pub mod traits;

mod error;
mod http;

pub use bugzilla::{BugzillaClient, parse_bug_ref};
pub use error::RemoteError;
pub use fas::{
    CredentialProvider, Credentials, FasClient, FasResponse, FasTransport, HttpFasTransport,
    PromptCredentials,
};
pub use feed::{FeedCache, FeedFetcher, HttpFeedFetcher, prune_stale};
pub use pkgdb::PkgDbClient;
pub use traits::{BugTracker, FeedSource, IdentityService, PackageDatabase};

/// User agent sent by every client in this crate.
pub(crate) const USER_AGENT: &str = "pkgdb-admin/0.1";

/// Request timeout shared by every client in this crate.
pub(crate) const TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Build the shared `reqwest::Client` used by the service clients.
///
/// # Panics
///
/// Panics if the underlying `reqwest::Client` fails to build.
#[must_use]
pub(crate) fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(TIMEOUT)
        .build()
        .expect("reqwest client should build")
}
