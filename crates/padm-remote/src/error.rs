//! Remote service error types.

use thiserror::Error;

/// Errors that can occur when talking to the remote services.
///
/// Expected negative findings (non-packager, branch conflict, feed presence)
/// are never errors; they become "bad" report entries in `padm-checks`.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The requested remote object does not exist.
    #[error("{resource} not found")]
    NotFound {
        /// Human-readable description of what was looked up.
        resource: String,
    },

    /// Authentication against the identity service failed after the one
    /// interactive retry.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// A ticket reference was neither a numeric id nor a recognizable URL.
    #[error("invalid bug reference: {0}")]
    InvalidBugRef(String),

    /// Failed to parse a service response or cached document.
    #[error("parse error: {0}")]
    Parse(String),

    /// Cache file I/O failure.
    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RemoteError {
    pub(crate) fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Whether this error is the not-found case.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
