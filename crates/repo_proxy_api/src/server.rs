//! Listener lifecycle for the proxy
//!
//! Binds the configured address, serves the proxy router and drains in-flight
//! requests once the process is asked to stop.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;

use crate::{routes, AppState, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT_SECS};

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;

/// Where the proxy listens and how long a single request may run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub port: u16,

    /// IP address to bind; host names are not resolved
    pub host: String,

    /// Requests still running after this long are answered with 408
    pub request_timeout: Duration,
}

impl ApiConfig {
    /// Socket address built from `host` and `port`.
    pub fn listen_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip = self.host.parse::<IpAddr>()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// The repository proxy bound to its listener settings.
pub struct ApiServer {
    config: ApiConfig,
    state: AppState,
}

impl ApiServer {
    pub fn new(config: ApiConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Accept repository creation requests until SIGINT or SIGTERM arrives.
    ///
    /// # Errors
    ///
    /// Fails when `host` is not an IP address or the address cannot be bound.
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = self
            .config
            .listen_addr()
            .with_context(|| format!("invalid listen host '{}'", self.config.host))?;

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("cannot bind {}", addr))?;

        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config.request_timeout.as_secs(),
            "Repository proxy listening"
        );

        let app = routes::create_router(self.state, self.config.request_timeout);
        axum::serve(listener, app)
            .with_graceful_shutdown(stop_requested())
            .await
            .context("repository proxy stopped unexpectedly")?;

        tracing::info!("Repository proxy stopped");
        Ok(())
    }
}

/// Resolves on the first SIGINT or SIGTERM.
///
/// A handler that cannot be installed is logged and never fires.
async fn stop_requested() {
    let interrupt = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "SIGINT handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal_name = tokio::select! {
        _ = interrupt => "SIGINT",
        _ = terminate => "SIGTERM",
    };
    tracing::info!(signal = signal_name, "Draining in-flight requests");
}
