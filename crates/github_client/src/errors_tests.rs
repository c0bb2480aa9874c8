use super::*;
use std::error::Error as StdError;

#[test]
fn test_auth_error() {
    let error = Error::AuthError("the token contains invalid characters".to_string());

    // Test error message
    assert_eq!(
        error.to_string(),
        "Failed to authenticate or initialize GitHub client: the token contains invalid characters"
    );

    // Test error source
    assert!(error.source().is_none());
}

#[test]
fn test_invalid_base_url_error() {
    let error = Error::InvalidBaseUrl("mailto:someone".to_string());

    assert_eq!(
        error.to_string(),
        "Invalid GitHub API base URL: mailto:someone"
    );
}

#[test]
fn test_transport_error() {
    let error = Error::Transport {
        kind: TransportFailure::Timeout,
        message: "operation timed out".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "GitHub request failed (timeout): operation timed out"
    );
    assert!(error.source().is_none());
}

#[test]
fn test_invalid_response_error() {
    let error = Error::InvalidResponse {
        status: 502,
        reason: "expected value at line 1 column 1".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "Invalid response from GitHub (status 502): expected value at line 1 column 1"
    );
}

#[test]
fn test_transport_failure_names() {
    assert_eq!(TransportFailure::Connect.as_str(), "connect");
    assert_eq!(TransportFailure::Timeout.as_str(), "timeout");
    assert_eq!(TransportFailure::Other.as_str(), "other");
    assert_eq!(TransportFailure::Timeout.to_string(), "timeout");
}

#[test]
fn test_error_is_send_sync() {
    // This test verifies that Error implements Send and Sync traits
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
