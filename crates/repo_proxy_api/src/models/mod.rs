//! HTTP response models
//!
//! Repository creation responses are relayed from GitHub as opaque JSON and
//! have no model here. Only the locally generated responses are typed.

pub mod response;

// Re-export commonly used types
pub use response::HealthResponse;
