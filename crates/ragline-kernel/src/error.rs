//! Error types for the retrieval pipeline.
//!
//! Two layers, matching where failures enter the system: [`ProviderError`]
//! for the external embedding/chat services, [`RagError`] for everything
//! the pipeline itself can get wrong.

use thiserror::Error;

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Failure surfaced by an external embedding or chat service.
///
/// Providers never retry internally and never substitute placeholder
/// output; every failure becomes one of these variants for the caller.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Authentication failure
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Rate limit exceeded
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Network failure
    #[error("Network error: {0}")]
    Network(String),

    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// API error not covered by a more specific variant
    #[error("API error: {message} (code: {code:?})")]
    Api {
        code: Option<String>,
        message: String,
    },

    /// The request could not be constructed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The service answered, but with something that does not match the
    /// contract (wrong row count, missing content, undecodable body)
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

/// Result type for pipeline operations.
pub type RagResult<T> = Result<T, RagError>;

/// Pipeline error taxonomy.
#[derive(Debug, Error)]
pub enum RagError {
    /// Missing credential or missing artifact; fatal at startup
    #[error("Configuration error: {0}")]
    Config(String),

    /// External service failure, surfaced unretried
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// A loaded artifact or record that is not what it claims to be
    #[error("Data error: {0}")]
    Data(String),

    /// A broken internal invariant (corpus/index misalignment,
    /// a chunk window that cannot advance)
    #[error("Invariant violation: {0}")]
    Invariant(String),

    /// Caller-supplied argument outside the contract
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO failure
    #[error("IO error: {0}")]
    Io(String),

    /// Serialization failure
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for RagError {
    fn from(err: std::io::Error) -> Self {
        RagError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RagError {
    fn from(err: serde_json::Error) -> Self {
        RagError::Serialization(err.to_string())
    }
}
