//! Tests for server module

use super::*;
use github_client::{GitHubClient, GitHubToken};
use repo_proxy_core::RepositoryProxy;
use std::sync::Arc;

fn test_state() -> AppState {
    let base_url = url::Url::parse(github_client::DEFAULT_API_URL).unwrap();
    let client = GitHubClient::new(GitHubToken::new("ghp_server"), &base_url).unwrap();
    AppState::new(RepositoryProxy::new(Arc::new(client)))
}

#[test]
fn test_default_config() {
    let config = ApiConfig::default();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.request_timeout, Duration::from_secs(30));
}

#[test]
fn test_listen_addr_combines_host_and_port() {
    let config = ApiConfig {
        host: "127.0.0.1".to_string(),
        port: 9090,
        ..ApiConfig::default()
    };

    let addr = config.listen_addr().unwrap();
    assert_eq!(addr, "127.0.0.1:9090".parse::<SocketAddr>().unwrap());
}

#[test]
fn test_listen_addr_accepts_ipv6() {
    let config = ApiConfig {
        host: "::1".to_string(),
        port: 8081,
        ..ApiConfig::default()
    };

    let addr = config.listen_addr().unwrap();
    assert!(addr.is_ipv6());
    assert_eq!(addr.port(), 8081);
}

#[test]
fn test_listen_addr_rejects_host_names() {
    let config = ApiConfig {
        host: "localhost".to_string(),
        ..ApiConfig::default()
    };

    assert!(config.listen_addr().is_err());
}

#[tokio::test]
async fn test_serve_rejects_invalid_host() {
    let config = ApiConfig {
        host: "not-an-ip".to_string(),
        ..ApiConfig::default()
    };

    let err = ApiServer::new(config, test_state()).serve().await.unwrap_err();
    assert!(err.to_string().contains("not-an-ip"));
}

#[tokio::test]
async fn test_serve_fails_when_port_taken() {
    let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let config = ApiConfig {
        host: "127.0.0.1".to_string(),
        port: occupied.local_addr().unwrap().port(),
        ..ApiConfig::default()
    };

    let err = ApiServer::new(config, test_state()).serve().await.unwrap_err();
    assert!(err.to_string().contains("cannot bind"));
}
