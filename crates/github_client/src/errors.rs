//! Error types for GitHub client operations.
//!
//! This module defines the errors that can occur while talking to the GitHub
//! repository-creation endpoint. Upstream application errors (a 422 for a name
//! that is already taken, a 401 for a revoked token) are not errors here: they
//! are returned as an [`UpstreamResponse`](crate::models::UpstreamResponse) and
//! relayed to the caller.
//!
//! None of the variants carry the credential. Messages built from transport
//! errors only ever contain the request URL.

use std::fmt;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Category of a transport-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailure {
    /// The connection to GitHub could not be established (DNS, refused, TLS).
    Connect,

    /// The request did not complete in time.
    Timeout,

    /// Any other failure while sending the request or reading the response.
    Other,
}

impl TransportFailure {
    /// Stable, lowercase name used in logs and error details.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportFailure::Connect => "connect",
            TransportFailure::Timeout => "timeout",
            TransportFailure::Other => "other",
        }
    }
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during GitHub client operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::Error;
///
/// match client.create_user_repository(&payload).await {
///     Ok(response) => println!("GitHub answered with {}", response.status),
///     Err(Error::Transport { kind, .. }) => eprintln!("GitHub unreachable ({kind})"),
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The credential cannot be used to build an `Authorization` header.
    ///
    /// This happens when the token contains characters that are not valid in
    /// an HTTP header value (for example a trailing newline). The token itself
    /// is never part of the message.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// The configured GitHub API base URL cannot be used.
    #[error("Invalid GitHub API base URL: {0}")]
    InvalidBaseUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// The request never produced a complete response from GitHub.
    #[error("GitHub request failed ({kind}): {message}")]
    Transport {
        /// What kind of transport failure occurred
        kind: TransportFailure,

        /// Description of the failure
        message: String,
    },

    /// GitHub answered, but the body is not a JSON document.
    #[error("Invalid response from GitHub (status {status}): {reason}")]
    InvalidResponse {
        /// Upstream HTTP status code
        status: u16,

        /// Why the body could not be decoded
        reason: String,
    },
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        let kind = if e.is_timeout() {
            TransportFailure::Timeout
        } else if e.is_connect() {
            TransportFailure::Connect
        } else {
            TransportFailure::Other
        };

        Error::Transport {
            kind,
            message: e.to_string(),
        }
    }
}
