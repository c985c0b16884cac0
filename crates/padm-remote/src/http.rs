//! Shared HTTP response helpers for the service clients.
//!
//! Centralizes status-code checks (401/403 → [`RemoteError::Auth`],
//! non-success → [`RemoteError::Api`]) so individual service modules stay
//! focused on request construction and response mapping.

use crate::error::RemoteError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **401 / 403** → [`RemoteError::Auth`] with the response body.
/// - **Non-success status** → [`RemoteError::Api`] with status code and
///   response body.
///
/// 404 is NOT special-cased here: clients that treat it as "object absent"
/// inspect the status before calling this.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(RemoteError::Auth(resp.text().await.unwrap_or_default()));
    }
    if !status.is_success() {
        return Err(RemoteError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Whether a status code is an authentication failure.
pub(crate) fn is_auth_failure(status: reqwest::StatusCode) -> bool {
    status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
}
