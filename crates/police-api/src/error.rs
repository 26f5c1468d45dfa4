//! Error types for police-api

/// Result type for police-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the upstream service
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport-level failure: connection, DNS, timeout, or non-2xx status
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed base origin supplied at client construction
    #[error("Invalid base URL: {0}")]
    Url(#[from] url::ParseError),
}
