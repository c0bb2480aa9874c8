//! Error handling and HTTP error conversion
//!
//! This module defines how proxy errors are translated to HTTP error
//! responses. Upstream application errors never reach this module; they are
//! relayed by the handler with GitHub's own status and body.
//!
//! | Error                       | Status | Code                      |
//! |-----------------------------|--------|---------------------------|
//! | `Validation`                | 400    | `ValidationError`         |
//! | `UpstreamUnavailable`       | 502    | `UpstreamUnavailable`     |
//! | `InvalidUpstreamResponse`   | 502    | `InvalidUpstreamResponse` |
//! | `Configuration`             | 500    | `InternalError`           |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use repo_proxy_core::ProxyError;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Standard error response for all locally generated errors.
///
/// All error responses follow this consistent structure to provide
/// machine-readable error codes and human-readable messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetails,
}

/// Error details structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Additional context (optional, type varies by error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Axum response wrapper for proxy errors
///
/// # Example
///
/// ```rust,ignore
/// async fn handler() -> Result<Response, ApiError> {
///     let upstream = proxy.create_repository(request).await?; // ProxyError -> ApiError
///     Ok(relay(upstream))
/// }
/// ```
#[derive(Debug)]
pub struct ApiError(ProxyError);

impl ApiError {
    /// Create a validation error with field information
    pub fn validation_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError(ProxyError::validation(field, message))
    }
}

impl From<ProxyError> for ApiError {
    fn from(err: ProxyError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = convert_error(&self.0);

        // Log error server-side
        log_error(&self.0, status);

        (status, Json(error_response)).into_response()
    }
}

/// Convert a proxy error to HTTP status code and error response.
///
/// Transport messages stay in the server log; the caller only learns the
/// failure category.
pub fn convert_error(error: &ProxyError) -> (StatusCode, ErrorResponse) {
    let (status, code, message, details) = match error {
        ProxyError::Validation { field, message } => (
            StatusCode::BAD_REQUEST,
            "ValidationError",
            message.clone(),
            Some(json!({ "field": field })),
        ),
        ProxyError::UpstreamUnavailable { kind, .. } => (
            StatusCode::BAD_GATEWAY,
            "UpstreamUnavailable",
            "GitHub could not be reached".to_string(),
            Some(json!({ "kind": kind.as_str() })),
        ),
        ProxyError::InvalidUpstreamResponse { status, .. } => (
            StatusCode::BAD_GATEWAY,
            "InvalidUpstreamResponse",
            "GitHub returned a response that could not be relayed".to_string(),
            Some(json!({ "upstreamStatus": status })),
        ),
        ProxyError::Configuration { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "InternalError",
            "An internal error occurred".to_string(),
            None,
        ),
    };

    (
        status,
        ErrorResponse {
            error: ErrorDetails {
                code: code.to_string(),
                message,
                details,
            },
        },
    )
}

/// Log error with appropriate level based on HTTP status
fn log_error(error: &ProxyError, status: StatusCode) {
    if status.is_server_error() {
        tracing::error!("API error: {} - {}", status, error);
    } else {
        tracing::warn!("API error: {} - {}", status, error);
    }
}
