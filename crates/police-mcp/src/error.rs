//! Error types for the MCP server

use thiserror::Error;

/// Result type alias for MCP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during MCP server operations
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the upstream API client
    #[error(transparent)]
    Api(#[from] police_api::Error),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown tool requested
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Tool arguments did not match the declared schema
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
