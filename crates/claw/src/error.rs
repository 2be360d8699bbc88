//! Error types for the claw client library.

use thiserror::Error;

use crate::transport::FailureKind;

/// Main error type for claw operations.
#[derive(Debug, Error)]
pub enum ClawError {
    /// Malformed or unreadable local configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Preference store read or write failure.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A request that did not produce a usable API response.
    #[error("{message}")]
    Transport {
        kind: FailureKind,
        message: String,
    },
}

/// Result type alias for claw operations.
pub type Result<T> = std::result::Result<T, ClawError>;
