//! # Models
//!
//! The request and response shapes exchanged with GitHub's
//! repository-creation endpoint.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Represents the payload for creating a new repository via the REST API.
///
/// All four keys are always serialized, so GitHub receives exactly
/// `name`, `description`, `private` and `auto_init`.
///
/// # Examples
///
/// ```
/// use github_client::models::RepositoryCreatePayload;
///
/// let payload = RepositoryCreatePayload::new("demo");
/// assert!(payload.private);
/// assert!(payload.auto_init);
/// assert_eq!(payload.description, "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryCreatePayload {
    /// The name of the repository
    pub name: String,

    /// A short description of the repository
    pub description: String,

    /// Whether the repository is private
    pub private: bool,

    /// Whether to create an initial commit with an empty README
    pub auto_init: bool,
}

impl RepositoryCreatePayload {
    /// Creates a payload for a private, auto-initialized repository with no
    /// description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            private: true,
            auto_init: true,
        }
    }
}

/// The answer GitHub gave to a repository-creation call.
///
/// Nothing in the body is inspected; it is carried as an opaque JSON value so
/// it can be relayed to the caller unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    /// HTTP status code returned by GitHub
    pub status: u16,

    /// Decoded JSON body returned by GitHub
    pub body: serde_json::Value,
}

impl UpstreamResponse {
    /// Creates a new upstream response.
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    /// Returns `true` when GitHub reported success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
