//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides a client that creates repositories for the user owning
//! a personal access token. It performs exactly one `POST /user/repos` call per
//! request and hands back GitHub's status and JSON body untouched, so callers
//! can relay them as they are.

use std::fmt;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error, info, instrument};
use url::Url;

pub mod errors;
pub use errors::{Error, TransportFailure};

pub mod models;
pub use models::{RepositoryCreatePayload, UpstreamResponse};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Base URL of the public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Media type GitHub recommends for REST API requests.
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// REST API version pinned on every request.
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Header used to pin the REST API version.
pub const GITHUB_API_VERSION_HEADER: &str = "x-github-api-version";

const USER_AGENT: &str = concat!("repo_proxy/", env!("CARGO_PKG_VERSION"));

/// Path of the repository-creation endpoint, relative to the API base URL.
const CREATE_USER_REPOSITORY_PATH: &str = "user/repos";

/// A GitHub access token.
///
/// The value is kept in a [`SecretString`] and is only exposed while building
/// the `Authorization` header. `Debug` output is redacted.
pub struct GitHubToken(SecretString);

impl GitHubToken {
    /// Wraps a raw token value.
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    /// Returns `true` when the token is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.expose_secret().trim().is_empty()
    }

    fn bearer_header(&self) -> Result<HeaderValue, Error> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.0.expose_secret()))
            .map_err(|_| {
                Error::AuthError(
                    "the token contains characters that are not valid in an HTTP header"
                        .to_string(),
                )
            })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl From<String> for GitHubToken {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for GitHubToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GitHubToken([REDACTED])")
    }
}

/// Trait for repository operations against the upstream API.
///
/// This is the seam between the proxy and GitHub; tests substitute their own
/// implementation to observe the forwarded payload.
#[async_trait]
pub trait RepositoryClient: Send + Sync {
    /// Creates a new repository for the authenticated user.
    ///
    /// Any answer GitHub gives, including 4xx and 5xx statuses, is returned as
    /// `Ok`. Only transport failures and non-JSON bodies are errors.
    async fn create_user_repository(
        &self,
        payload: &RepositoryCreatePayload,
    ) -> Result<UpstreamResponse, Error>;
}

/// A client for the GitHub repository-creation endpoint, authenticated with a
/// bearer token.
pub struct GitHubClient {
    client: reqwest::Client,
    create_repository_url: Url,
}

impl GitHubClient {
    /// Creates a new `GitHubClient`.
    ///
    /// The token is attached to every request as `Authorization: Bearer <token>`
    /// together with the GitHub media type and the pinned API version.
    ///
    /// # Arguments
    ///
    /// * `token` - The access token used to authenticate with GitHub.
    /// * `base_url` - The API base URL, e.g. `https://api.github.com` or a
    ///   GitHub Enterprise URL such as `https://ghe.example.com/api/v3`.
    ///
    /// # Errors
    ///
    /// Returns `Error::AuthError` if the token cannot be used in a header,
    /// `Error::InvalidBaseUrl` if the endpoint URL cannot be derived from
    /// `base_url` and `Error::ClientBuild` if the HTTP client fails to build.
    ///
    /// # Example
    ///
    /// ```rust
    /// use github_client::{GitHubClient, GitHubToken, DEFAULT_API_URL};
    /// use url::Url;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let base_url = Url::parse(DEFAULT_API_URL)?;
    /// let client = GitHubClient::new(GitHubToken::new("ghp_example"), &base_url)?;
    /// assert_eq!(
    ///     client.create_repository_url().as_str(),
    ///     "https://api.github.com/user/repos"
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(token: GitHubToken, base_url: &Url) -> Result<Self, Error> {
        let create_repository_url = endpoint_url(base_url, CREATE_USER_REPOSITORY_PATH)?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, token.bearer_header()?);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(
            HeaderName::from_static(GITHUB_API_VERSION_HEADER),
            HeaderValue::from_static(GITHUB_API_VERSION),
        );

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                error!(error = %e, "Failed to build HTTP client for GitHub");
                Error::ClientBuild(e.to_string())
            })?;

        debug!(url = %create_repository_url, "Created GitHub client");

        Ok(Self {
            client,
            create_repository_url,
        })
    }

    /// The fully resolved URL of the repository-creation endpoint.
    pub fn create_repository_url(&self) -> &Url {
        &self.create_repository_url
    }
}

impl fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubClient")
            .field("create_repository_url", &self.create_repository_url.as_str())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl RepositoryClient for GitHubClient {
    /// Creates a new repository for the token owner with a single
    /// `POST /user/repos` call.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if GitHub cannot be reached or the response
    /// cannot be read, and `Error::InvalidResponse` if the body is not JSON.
    #[instrument(skip(self, payload), fields(repository = %payload.name))]
    async fn create_user_repository(
        &self,
        payload: &RepositoryCreatePayload,
    ) -> Result<UpstreamResponse, Error> {
        debug!(
            url = %self.create_repository_url,
            private = payload.private,
            auto_init = payload.auto_init,
            "Sending repository creation request to GitHub"
        );

        let response = self
            .client
            .post(self.create_repository_url.clone())
            .json(payload)
            .send()
            .await
            .map_err(|e| log_transport_error("Failed to send repository creation request", e))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| log_transport_error("Failed to read GitHub response body", e))?;

        let body = serde_json::from_slice(&bytes).map_err(|e| {
            error!(
                status,
                body_length = bytes.len(),
                error = %e,
                "GitHub response body is not valid JSON"
            );
            Error::InvalidResponse {
                status,
                reason: e.to_string(),
            }
        })?;

        info!(status, "GitHub answered repository creation request");

        Ok(UpstreamResponse::new(status, body))
    }
}

/// Resolves `path` against `base_url`, keeping any path prefix the base URL
/// already has (GitHub Enterprise serves the API under `/api/v3`).
fn endpoint_url(base_url: &Url, path: &str) -> Result<Url, Error> {
    if base_url.cannot_be_a_base() {
        return Err(Error::InvalidBaseUrl(base_url.to_string()));
    }

    let mut base = base_url.clone();
    if !base.path().ends_with('/') {
        let prefixed = format!("{}/", base.path());
        base.set_path(&prefixed);
    }

    base.join(path)
        .map_err(|e| Error::InvalidBaseUrl(format!("{}: {}", base_url, e)))
}

fn log_transport_error(message: &str, e: reqwest::Error) -> Error {
    let err = Error::from(e);
    if let Error::Transport { kind, message: detail } = &err {
        error!(
            kind = %kind,
            error_message = %detail,
            "{}. GitHub could not be reached.",
            message
        );
    }
    err
}
