//! Request middleware
//!
//! Adds a request ID and start/completion log lines to every request.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Header carrying the generated request ID on every response.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request tracing middleware.
///
/// Generates a request ID, logs the start and completion of the request and
/// returns the ID to the caller in the `x-request-id` header.
pub async fn tracing_middleware(request: Request, next: Next) -> Response {
    let request_id = uuid::Uuid::new_v4().to_string();

    tracing::info!(
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
        "Request started"
    );

    let mut response = next.run(request).await;

    tracing::info!(
        request_id = %request_id,
        status = %response.status(),
        "Request completed"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    response
}

#[cfg(test)]
#[path = "middleware_tests.rs"]
mod tests;
