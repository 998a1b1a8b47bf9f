//! Error types for the token compiler
//!
//! The compiler itself never fails: malformed token values flow through to
//! the emitted artifacts and the validator reports them as findings. Errors
//! exist only at the serialization boundary, where a document is loaded
//! from or saved to JSON.

use thiserror::Error;

/// Boundary errors for token document serialization
#[derive(Debug, Error)]
pub enum Error {
    /// The input text is not a valid token document
    #[error("invalid token document: {0}")]
    Document(#[from] serde_json::Error),
}

/// Result type alias for tokenforge operations
pub type Result<T> = std::result::Result<T, Error>;
