// Unit tests for repo_proxy_core
// Covers create_repository relay and error paths with an isolated mock client

use super::*;
use async_trait::async_trait;
use github_client::{errors::Error as GitHubError, TransportFailure};
use serde_json::json;
use std::sync::Mutex;
use tracing_test::traced_test;

// --- MOCK STRUCTS ---

/// What the mock client answers with
enum MockOutcome {
    Respond(u16, serde_json::Value),
    TransportFailure,
    NonJsonBody(u16),
}

/// Mock repository client that records every payload it receives
struct RecordingRepoClient {
    outcome: MockOutcome,
    payloads: Mutex<Vec<RepositoryCreatePayload>>,
}

impl RecordingRepoClient {
    fn new(outcome: MockOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            payloads: Mutex::new(Vec::new()),
        })
    }

    fn payloads(&self) -> Vec<RepositoryCreatePayload> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl RepositoryClient for RecordingRepoClient {
    async fn create_user_repository(
        &self,
        payload: &RepositoryCreatePayload,
    ) -> Result<UpstreamResponse, GitHubError> {
        self.payloads.lock().unwrap().push(payload.clone());

        match &self.outcome {
            MockOutcome::Respond(status, body) => Ok(UpstreamResponse::new(*status, body.clone())),
            MockOutcome::TransportFailure => Err(GitHubError::Transport {
                kind: TransportFailure::Connect,
                message: "connection refused".to_string(),
            }),
            MockOutcome::NonJsonBody(status) => Err(GitHubError::InvalidResponse {
                status: *status,
                reason: "expected value at line 1 column 1".to_string(),
            }),
        }
    }
}

fn proxy_with(client: &Arc<RecordingRepoClient>) -> RepositoryProxy {
    RepositoryProxy::new(client.clone())
}

// --- TESTS ---

#[tokio::test]
async fn test_create_repository_forwards_demo_scenario() {
    let client = RecordingRepoClient::new(MockOutcome::Respond(201, json!({ "name": "demo" })));
    let proxy = proxy_with(&client);

    let request: CreationRequest = serde_json::from_value(json!({
        "name": "demo",
        "description": "test",
        "privateRepo": false,
        "autoInit": false
    }))
    .unwrap();

    proxy.create_repository(request).await.unwrap();

    let payloads = client.payloads();
    assert_eq!(payloads.len(), 1);
    assert_eq!(
        serde_json::to_value(&payloads[0]).unwrap(),
        json!({
            "name": "demo",
            "description": "test",
            "private": false,
            "auto_init": false
        })
    );
}

#[tokio::test]
async fn test_create_repository_forwards_defaults() {
    let client = RecordingRepoClient::new(MockOutcome::Respond(201, json!({})));
    let proxy = proxy_with(&client);

    proxy
        .create_repository(CreationRequest::new("x"))
        .await
        .unwrap();

    assert_eq!(client.payloads(), vec![RepositoryCreatePayload::new("x")]);
}

#[tokio::test]
async fn test_create_repository_relays_status_and_body() {
    for (status, body) in [
        (201, json!({ "id": 1, "full_name": "octocat/x" })),
        (422, json!({ "message": "Repository creation failed." })),
        (401, json!({ "message": "Bad credentials" })),
    ] {
        let client = RecordingRepoClient::new(MockOutcome::Respond(status, body.clone()));
        let proxy = proxy_with(&client);

        let response = proxy
            .create_repository(CreationRequest::new("x"))
            .await
            .unwrap();

        assert_eq!(response.status, status);
        assert_eq!(response.body, body);
    }
}

#[tokio::test]
async fn test_create_repository_rejects_blank_name_without_upstream_call() {
    let client = RecordingRepoClient::new(MockOutcome::Respond(201, json!({})));
    let proxy = proxy_with(&client);

    let result = proxy.create_repository(CreationRequest::new("  ")).await;

    assert!(matches!(result, Err(ProxyError::Validation { .. })));
    assert!(client.payloads().is_empty());
}

#[tokio::test]
async fn test_create_repository_transport_failure() {
    let client = RecordingRepoClient::new(MockOutcome::TransportFailure);
    let proxy = proxy_with(&client);

    let result = proxy.create_repository(CreationRequest::new("x")).await;

    assert!(matches!(
        result,
        Err(ProxyError::UpstreamUnavailable {
            kind: TransportFailure::Connect,
            ..
        })
    ));
    assert_eq!(client.payloads().len(), 1);
}

#[tokio::test]
async fn test_create_repository_non_json_upstream_body() {
    let client = RecordingRepoClient::new(MockOutcome::NonJsonBody(502));
    let proxy = proxy_with(&client);

    let result = proxy.create_repository(CreationRequest::new("x")).await;

    assert!(matches!(
        result,
        Err(ProxyError::InvalidUpstreamResponse { status: 502, .. })
    ));
}

#[tokio::test]
#[traced_test]
async fn test_create_repository_logs_declined_request() {
    let client = RecordingRepoClient::new(MockOutcome::Respond(
        422,
        json!({ "message": "name already exists on this account" }),
    ));
    let proxy = proxy_with(&client);

    proxy
        .create_repository(CreationRequest::new("taken"))
        .await
        .unwrap();

    assert!(logs_contain("Forwarding repository creation request"));
    assert!(logs_contain("GitHub declined repository creation"));
}
