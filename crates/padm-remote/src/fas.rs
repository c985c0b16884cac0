//! Identity service (account system) client.
//!
//! Resolves accounts by username or email and answers the packager
//! predicate. Requests start unauthenticated; on the first 401/403 the
//! injected [`CredentialProvider`] is asked for credentials and the failed
//! call is retried exactly once. A second auth failure is fatal.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use padm_core::Person;
use serde::de::DeserializeOwned;

use crate::error::RemoteError;
use crate::http::is_auth_failure;
use crate::traits::IdentityService;

/// A username/password pair for the identity service.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Source of credentials when the identity service demands authentication.
///
/// The production implementation prompts on the terminal; tests inject a
/// static stub so no check ever blocks on stdin.
pub trait CredentialProvider: Send + Sync {
    /// Obtain credentials, interactively or otherwise.
    ///
    /// # Errors
    ///
    /// [`RemoteError::Auth`] when no credentials can be produced.
    fn credentials(&self) -> Result<Credentials, RemoteError>;
}

/// Interactive terminal prompt for identity-service credentials.
pub struct PromptCredentials {
    /// Pre-filled username, typically from config.
    pub default_username: Option<String>,
}

impl CredentialProvider for PromptCredentials {
    fn credentials(&self) -> Result<Credentials, RemoteError> {
        eprintln!("The identity service requires authentication to keep going.");

        let mut input = dialoguer::Input::<String>::new().with_prompt("Username");
        if let Some(default) = &self.default_username {
            input = input.default(default.clone());
        }
        let username = input
            .interact_text()
            .map_err(|error| RemoteError::Auth(error.to_string()))?;
        let password = dialoguer::Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(|error| RemoteError::Auth(error.to_string()))?;

        Ok(Credentials { username, password })
    }
}

/// A raw identity-service response: status plus body.
pub struct FasResponse {
    pub status: reqwest::StatusCode,
    pub body: String,
}

/// Network seam for identity-service GETs, so tests can script status
/// sequences and inspect which credentials each request carried.
#[async_trait]
pub trait FasTransport: Send + Sync {
    /// GET `url`, authenticating with `credentials` when present.
    ///
    /// # Errors
    ///
    /// Transport errors only; non-success statuses are returned, not raised.
    async fn get(
        &self,
        url: &str,
        credentials: Option<&Credentials>,
    ) -> Result<FasResponse, RemoteError>;
}

/// The production transport: HTTP GET with optional basic auth.
pub struct HttpFasTransport {
    http: reqwest::Client,
}

impl Default for HttpFasTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFasTransport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            http: crate::build_http_client(),
        }
    }
}

#[async_trait]
impl FasTransport for HttpFasTransport {
    async fn get(
        &self,
        url: &str,
        credentials: Option<&Credentials>,
    ) -> Result<FasResponse, RemoteError> {
        let mut request = self.http.get(url);
        if let Some(credentials) = credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.password));
        }
        let resp = request.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        Ok(FasResponse { status, body })
    }
}

#[derive(serde::Deserialize)]
struct PeopleQueryResponse {
    #[serde(default)]
    people: Vec<PersonId>,
}

#[derive(serde::Deserialize)]
struct PersonId {
    id: u64,
}

#[derive(serde::Deserialize)]
struct AlternateEmailsResponse {
    /// Email address → account id.
    #[serde(default)]
    emails: HashMap<String, u64>,
}

/// HTTP client for the account system API.
pub struct FasClient<T = HttpFasTransport> {
    transport: T,
    base: String,
    provider: Box<dyn CredentialProvider>,
    credentials: Mutex<Option<Credentials>>,
    /// Lazily fetched alternate-email index, one fetch per client lifetime.
    alternate_emails: tokio::sync::Mutex<Option<HashMap<String, u64>>>,
}

impl FasClient<HttpFasTransport> {
    #[must_use]
    pub fn new(base_url: &str, provider: Box<dyn CredentialProvider>) -> Self {
        Self::with_transport(HttpFasTransport::new(), base_url, provider)
    }
}

impl<T: FasTransport> FasClient<T> {
    #[must_use]
    pub fn with_transport(
        transport: T,
        base_url: &str,
        provider: Box<dyn CredentialProvider>,
    ) -> Self {
        Self {
            transport,
            base: base_url.trim_end_matches('/').to_string(),
            provider,
            credentials: Mutex::new(None),
            alternate_emails: tokio::sync::Mutex::new(None),
        }
    }

    /// Resolve an account by username. Unknown accounts are `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Transport/API errors, or [`RemoteError::Auth`] after a failed retry.
    pub async fn person_by_username(&self, username: &str) -> Result<Option<Person>, RemoteError> {
        self.get(&format!("/api/people/{}", urlencoding::encode(username)))
            .await
    }

    /// Resolve an account by its numeric id. Unknown ids are `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Transport/API errors, or [`RemoteError::Auth`] after a failed retry.
    pub async fn person_by_id(&self, id: u64) -> Result<Option<Person>, RemoteError> {
        self.get(&format!("/api/people/id/{id}")).await
    }

    /// Resolve an account by email address.
    ///
    /// The service's alternate-email index is consulted first (it covers
    /// addresses used on the bug tracker that differ from the account
    /// email); a query-by-field lookup is the fallback.
    ///
    /// # Errors
    ///
    /// Transport/API errors, or [`RemoteError::Auth`] after a failed retry.
    pub async fn person_by_email(&self, email: &str) -> Result<Option<Person>, RemoteError> {
        if let Some(id) = self.alternate_email_id(email).await? {
            return self.person_by_id(id).await;
        }

        let query: Option<PeopleQueryResponse> = self
            .get(&format!("/api/people?email={}", urlencoding::encode(email)))
            .await?;
        match query.and_then(|data| data.people.into_iter().next()) {
            Some(person) => self.person_by_id(person.id).await,
            None => Ok(None),
        }
    }

    /// Whether `user` holds an approved packager role.
    ///
    /// `user` containing `@` is treated as an email address (account email
    /// or bug-tracker alternate), anything else as a username. An unknown
    /// account is `false`, not an error.
    ///
    /// # Errors
    ///
    /// Transport/API errors, or [`RemoteError::Auth`] after a failed retry.
    pub async fn is_packager(&self, user: &str) -> Result<bool, RemoteError> {
        let person = if user.contains('@') {
            self.person_by_email(user.trim()).await?
        } else {
            self.person_by_username(user).await?
        };
        Ok(person.is_some_and(|person| person.is_approved_packager()))
    }

    async fn alternate_email_id(&self, email: &str) -> Result<Option<u64>, RemoteError> {
        let mut index = self.alternate_emails.lock().await;
        if index.is_none() {
            let fetched: Option<AlternateEmailsResponse> =
                self.get("/api/alternate-emails").await?;
            *index = Some(fetched.map(|data| data.emails).unwrap_or_default());
        }
        Ok(index
            .as_ref()
            .and_then(|emails| emails.get(email).copied()))
    }

    /// GET a JSON document, treating 404 as `Ok(None)` and recovering from
    /// one auth failure via the credential provider.
    async fn get<D: DeserializeOwned>(&self, path: &str) -> Result<Option<D>, RemoteError> {
        let url = format!("{}{path}", self.base);
        let mut resp = self
            .transport
            .get(&url, self.current_credentials().as_ref())
            .await?;

        if is_auth_failure(resp.status) {
            tracing::info!(%url, "identity service demanded authentication, re-prompting once");
            self.refresh_credentials()?;
            resp = self
                .transport
                .get(&url, self.current_credentials().as_ref())
                .await?;
            if is_auth_failure(resp.status) {
                return Err(RemoteError::Auth(
                    "identity service rejected the supplied credentials".to_string(),
                ));
            }
        }

        if resp.status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status.is_success() {
            return Err(RemoteError::Api {
                status: resp.status.as_u16(),
                message: resp.body,
            });
        }
        serde_json::from_str(&resp.body)
            .map(Some)
            .map_err(|error| RemoteError::Parse(error.to_string()))
    }

    fn refresh_credentials(&self) -> Result<(), RemoteError> {
        let credentials = self.provider.credentials()?;
        *self
            .credentials
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(credentials);
        Ok(())
    }

    fn current_credentials(&self) -> Option<Credentials> {
        self.credentials
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl<T: FasTransport> IdentityService for FasClient<T> {
    async fn is_packager(&self, user: &str) -> Result<bool, RemoteError> {
        Self::is_packager(self, user).await
    }
}
