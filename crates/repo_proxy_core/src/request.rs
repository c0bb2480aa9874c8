//! Repository creation request types
//!
//! The inbound request accepted by the proxy and its translation into the
//! payload GitHub expects.

use github_client::RepositoryCreatePayload;
use serde::{Deserialize, Serialize};

use crate::{ProxyError, ProxyResult};

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;

/// Request for creating a new repository for the credential owner.
///
/// Keys are camelCase on the wire. Only `name` is required; unknown keys are
/// ignored.
///
/// # Examples
///
/// ```rust
/// use repo_proxy_core::CreationRequest;
///
/// let request: CreationRequest = serde_json::from_str(r#"{ "name": "x" }"#).unwrap();
/// assert_eq!(request.description, "");
/// assert!(request.private_repo);
/// assert!(request.auto_init);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationRequest {
    /// Repository name
    pub name: String,

    /// Repository description
    #[serde(default)]
    pub description: String,

    /// Whether the repository is private
    #[serde(default = "default_true")]
    pub private_repo: bool,

    /// Whether GitHub should create an initial commit
    #[serde(default = "default_true")]
    pub auto_init: bool,
}

fn default_true() -> bool {
    true
}

impl CreationRequest {
    /// Creates a request with the default description, visibility and
    /// initialization settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            private_repo: true,
            auto_init: true,
        }
    }

    /// Checks the request before it is forwarded.
    ///
    /// Only the presence of a name is enforced here. GitHub applies its own
    /// naming rules and reports violations with a 422, which is relayed.
    ///
    /// # Errors
    ///
    /// Returns `ProxyError::Validation` if the name is empty or whitespace.
    pub fn validate(&self) -> ProxyResult<()> {
        if self.name.trim().is_empty() {
            return Err(ProxyError::validation(
                "name",
                "Repository name cannot be empty",
            ));
        }

        Ok(())
    }
}

impl From<CreationRequest> for RepositoryCreatePayload {
    fn from(request: CreationRequest) -> Self {
        RepositoryCreatePayload {
            name: request.name,
            description: request.description,
            private: request.private_repo,
            auto_init: request.auto_init,
        }
    }
}
