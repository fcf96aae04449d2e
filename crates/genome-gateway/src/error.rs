//! Error types for the genome gateway library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gateway operations.
///
/// Region validation itself never surfaces these: a failed backend lookup is
/// folded into the outcome as an unknown region. They are returned by the
/// backends, configuration loading and fixture parsing.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The metadata backend answered, but not with something usable.
    #[error("Backend error describing region '{region_name}' of genome '{genome_id}': {message}")]
    Backend {
        genome_id: String,
        region_name: String,
        message: String,
    },

    /// Transport error from the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed region fixture.
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
