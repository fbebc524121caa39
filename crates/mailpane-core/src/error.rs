//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An action outside the recognized set reached the transition.
    ///
    /// This is a programming error upstream: the store never applies a
    /// best-guess state for it, and callers should surface it loudly
    /// instead of swallowing it.
    #[error("unrecognized action")]
    UnknownAction,

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
