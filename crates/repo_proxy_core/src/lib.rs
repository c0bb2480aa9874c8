//! # Repo Proxy Core
//!
//! This crate holds the domain logic of the repository-creation proxy: it
//! validates an inbound [`CreationRequest`], renames its fields into the
//! payload GitHub expects, issues one upstream call and hands back the
//! upstream [`UpstreamResponse`] unchanged.
//!
//! ## Architecture
//!
//! The upstream client is injected through the [`RepositoryClient`] trait, so
//! the credential lives inside the client that was constructed at startup and
//! tests can substitute their own implementation.
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use github_client::{GitHubClient, GitHubToken, DEFAULT_API_URL};
//! use repo_proxy_core::{CreationRequest, RepositoryProxy};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let base_url = url::Url::parse(DEFAULT_API_URL)?;
//! let client = GitHubClient::new(GitHubToken::new("ghp_example"), &base_url)?;
//! let proxy = RepositoryProxy::new(Arc::new(client));
//!
//! let response = proxy.create_repository(CreationRequest::new("my-new-project")).await?;
//! println!("GitHub answered {}: {}", response.status, response.body);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use github_client::{RepositoryClient, RepositoryCreatePayload};
use tracing::{info, warn};

mod errors;
pub use errors::{ProxyError, ProxyResult};

/// Repository creation request types
pub mod request;
pub use request::CreationRequest;

pub use github_client::UpstreamResponse;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Forwards repository-creation requests to GitHub.
///
/// Each call is a one-shot transformation: validate, rename, issue exactly
/// one upstream call, relay. The proxy keeps no state between calls and is
/// cheap to clone.
#[derive(Clone)]
pub struct RepositoryProxy {
    client: Arc<dyn RepositoryClient>,
}

impl RepositoryProxy {
    /// Create a new proxy around an authenticated upstream client.
    pub fn new(client: Arc<dyn RepositoryClient>) -> Self {
        Self { client }
    }

    /// Create a repository for the credential owner.
    ///
    /// Whatever GitHub answers, success or failure, is returned as `Ok` so the
    /// caller can relay status and body verbatim.
    ///
    /// # Errors
    ///
    /// * `ProxyError::Validation` - the request was rejected locally and no
    ///   upstream call was made
    /// * `ProxyError::UpstreamUnavailable` - GitHub could not be reached
    /// * `ProxyError::InvalidUpstreamResponse` - GitHub's body is not JSON
    pub async fn create_repository(
        &self,
        request: CreationRequest,
    ) -> ProxyResult<UpstreamResponse> {
        if let Err(e) = request.validate() {
            warn!(error = %e, "Rejected repository creation request");
            return Err(e);
        }

        let payload = RepositoryCreatePayload::from(request);
        info!(
            repository = %payload.name,
            private = payload.private,
            auto_init = payload.auto_init,
            "Forwarding repository creation request"
        );

        let response = self.client.create_user_repository(&payload).await?;

        if response.is_success() {
            info!(
                repository = %payload.name,
                status = response.status,
                "Repository created"
            );
        } else {
            warn!(
                repository = %payload.name,
                status = response.status,
                "GitHub declined repository creation, relaying response"
            );
        }

        Ok(response)
    }
}

impl std::fmt::Debug for RepositoryProxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepositoryProxy").finish_non_exhaustive()
    }
}
