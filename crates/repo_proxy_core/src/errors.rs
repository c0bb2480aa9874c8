//! Error types for the repository-creation proxy.
//!
//! Upstream application errors are deliberately absent: a 422 or 401 from
//! GitHub is a successful relay, not a local failure.

use github_client::{Error as GitHubError, TransportFailure};
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Result type for proxy operations
pub type ProxyResult<T> = Result<T, ProxyError>;

/// Errors produced while forwarding a repository-creation request.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// The inbound request is malformed and was not forwarded.
    #[error("Invalid field '{field}': {message}")]
    Validation { field: String, message: String },

    /// GitHub could not be reached or the response could not be read.
    #[error("GitHub is unavailable ({kind}): {reason}")]
    UpstreamUnavailable {
        kind: TransportFailure,
        reason: String,
    },

    /// GitHub answered with something that cannot be relayed as JSON.
    #[error("GitHub returned an unusable response (status {status}): {reason}")]
    InvalidUpstreamResponse { status: u16, reason: String },

    /// The proxy is misconfigured (credential or upstream URL unusable).
    #[error("Proxy configuration error: {reason}")]
    Configuration { reason: String },
}

impl ProxyError {
    /// Create a validation error for a request field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ProxyError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<GitHubError> for ProxyError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::Transport { kind, message } => ProxyError::UpstreamUnavailable {
                kind,
                reason: message,
            },
            GitHubError::InvalidResponse { status, reason } => {
                ProxyError::InvalidUpstreamResponse { status, reason }
            }
            GitHubError::AuthError(reason)
            | GitHubError::InvalidBaseUrl(reason)
            | GitHubError::ClientBuild(reason) => ProxyError::Configuration { reason },
        }
    }
}
