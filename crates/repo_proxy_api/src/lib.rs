//! Repo Proxy REST API
//!
//! This crate provides the HTTP surface of the repository-creation proxy.
//! It accepts a creation request, forwards it to GitHub with the credential
//! the server was started with, and relays GitHub's status and body.
//!
//! # Architecture
//!
//! This crate exists in the HTTP layer and handles:
//! - HTTP request decoding and response relay
//! - Error mapping from domain to HTTP
//! - Routing, middleware and server configuration
//! - Process configuration and logging setup
//!
//! **CRITICAL**: This crate must never be imported by business logic.
//! The dependency flows: HTTP API → Business Logic, never the reverse.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;

use repo_proxy_core::RepositoryProxy;

// Re-export key types for convenience
pub use config::{ConfigError, ProxyConfig};
pub use errors::{ApiError, ErrorResponse};
pub use server::{ApiConfig, ApiServer};

/// Default API port
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default request timeout applied by the HTTP layer, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Proxy used to forward repository creation requests
    pub proxy: RepositoryProxy,
}

impl AppState {
    /// Create new application state around a configured proxy
    pub fn new(proxy: RepositoryProxy) -> Self {
        Self { proxy }
    }
}
