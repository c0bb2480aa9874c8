//! Tests for routes module

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use github_client::{GitHubClient, GitHubToken};
use repo_proxy_core::RepositoryProxy;
use std::sync::Arc;
use tower::ServiceExt;

fn test_router() -> Router {
    let base_url = url::Url::parse("http://127.0.0.1:9").unwrap();
    let client = GitHubClient::new(GitHubToken::new("ghp_routes"), &base_url).unwrap();
    let state = AppState::new(RepositoryProxy::new(Arc::new(client)));
    create_router(state, Duration::from_secs(30))
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let request = Request::builder()
        .uri("/api/unknown")
        .body(Body::empty())
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_on_repos_is_not_allowed() {
    let request = Request::builder()
        .method("GET")
        .uri("/api/repos")
        .body(Body::empty())
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_cors_preflight_allows_post() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/repos")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert!(response
        .headers()
        .contains_key(api_middleware::REQUEST_ID_HEADER));
}
