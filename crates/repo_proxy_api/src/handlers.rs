//! HTTP request handlers
//!
//! Handlers translate HTTP requests into proxy calls and proxy results back
//! into HTTP responses.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use repo_proxy_core::{CreationRequest, ProxyError, UpstreamResponse};

use crate::{errors::ApiError, models::HealthResponse, AppState};

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;

/// POST /api/repos
///
/// Create a repository for the credential owner and relay GitHub's answer.
///
/// The body is decoded as JSON regardless of the request's `Content-Type`.
/// A body that cannot be decoded is rejected with 400 before any upstream
/// call is made.
pub async fn create_repository(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request: CreationRequest = serde_json::from_slice(&body).map_err(|e| {
        ApiError::validation_error(
            "body",
            format!("Request body is not a valid repository creation request: {}", e),
        )
    })?;

    let upstream = state.proxy.create_repository(request).await?;

    relay(upstream)
}

/// Turn GitHub's answer into the response sent to the caller.
///
/// The status is copied and the body is re-encoded from the decoded JSON.
fn relay(upstream: UpstreamResponse) -> Result<Response, ApiError> {
    let status = StatusCode::from_u16(upstream.status).map_err(|_| {
        ApiError::from(ProxyError::InvalidUpstreamResponse {
            status: upstream.status,
            reason: "status code cannot be relayed".to_string(),
        })
    })?;

    Ok((status, Json(upstream.body)).into_response())
}

/// GET /api/health
///
/// Liveness check. Does not contact GitHub.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
