//! Repo Proxy REST API Server
//!
//! Main binary for running the API server in production or development.
//!
//! # Environment Variables
//!
//! - `GITHUB_TOKEN`: Access token used for repository creation (required)
//! - `GITHUB_API_URL`: GitHub REST API base URL (default: https://api.github.com)
//! - `API_PORT`: Port to listen on (default: 8080)
//! - `API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `API_REQUEST_TIMEOUT_SECS`: Per-request timeout (default: 30)
//! - `LOG_FORMAT`: `text` or `json` (default: text)
//! - `RUST_LOG`: Log level (default: info)

use std::sync::Arc;

use github_client::GitHubClient;
use repo_proxy_api::{logging, AppState, ApiServer, ProxyConfig};
use repo_proxy_core::RepositoryProxy;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let config = ProxyConfig::from_env()?;

    logging::init_tracing(config.log_format)?;

    let github_api_url = config.github_api_url;
    let client = GitHubClient::new(config.github_token, &github_api_url)?;

    // Create app state and server
    let state = AppState::new(RepositoryProxy::new(Arc::new(client)));
    let server = ApiServer::new(config.server, state);

    tracing::info!("Starting repository creation proxy");
    tracing::info!("GitHub API: {}", github_api_url);

    // Start server with graceful shutdown
    server.serve().await
}
