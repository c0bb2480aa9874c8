//! HTTP routing configuration
//!
//! All routes are prefixed with `/api`:
//!
//! - POST   /api/repos  - Create repository (relayed to GitHub)
//! - GET    /api/health - Health check

use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::{handlers, middleware as api_middleware, AppState};

/// Create the complete API router with all routes configured.
///
/// This function sets up:
/// - All endpoint routes
/// - CORS configuration
/// - Request tracing
/// - Timeout handling (requests exceeding `request_timeout` get a 408)
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    // Configure CORS for web UI support
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(false)
        // Cache preflight responses for 1 hour
        .max_age(Duration::from_secs(3600));

    // Headers are left out of spans; they are of no use for a single endpoint
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new())
        .on_response(DefaultOnResponse::new());

    let timeout_layer = TimeoutLayer::new(request_timeout);

    let api = Router::new()
        .route("/repos", post(handlers::create_repository))
        .route("/health", get(handlers::health_check))
        .layer(middleware::from_fn(api_middleware::tracing_middleware))
        .layer(timeout_layer)
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);

    Router::new().nest("/api", api)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
