//! Error types for lumigraph-core.

use thiserror::Error;

/// Editor error types.
///
/// Invalid topology operations (moving or removing a node that no longer
/// exists, connecting a missing endpoint) are not errors: they are reported
/// through `bool`/`Option` returns on [`crate::graph::GraphStore`] and the
/// caller decides whether to no-op. Only decode, I/O, render, and
/// configuration failures surface through this enum.
#[derive(Error, Debug)]
pub enum Error {
    /// Persisted document structure mismatch.
    #[error("Decode error: {0}")]
    Decode(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A rendering surface rejected a draw call.
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for editor operations.
pub type Result<T> = std::result::Result<T, Error>;
