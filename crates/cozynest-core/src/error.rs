//! Error types for CozyNest core operations

use thiserror::Error;

/// Main error type for store and session operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Login rejected or registration conflict, with the store's message
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Transport-level failure reaching the store
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response arrived but did not match the expected shape
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
