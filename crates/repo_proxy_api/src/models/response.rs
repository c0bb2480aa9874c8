//! HTTP response type definitions

use serde::{Deserialize, Serialize};

/// HTTP response for the health check endpoint.
///
/// # Example
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "timestamp": "2025-11-12T10:30:00Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,

    /// Time the check was answered (ISO 8601)
    pub timestamp: String,
}

impl HealthResponse {
    /// A healthy response stamped with the current time
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
