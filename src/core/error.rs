//! Error types for server startup and transport plumbing.
//!
//! Tool failures never reach this type at runtime: handlers turn them into
//! failure envelopes. `Tool` only covers registry construction.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// The tool registry could not be built.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from file operations or network communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolError;

    #[test]
    fn test_tool_error_conversion() {
        let err: Error = ToolError::unknown_tool("missing").into();
        assert_eq!(err.to_string(), "Tool error: Unknown tool: missing");
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Error::config("bad port").to_string(), "Configuration error: bad port");
        assert_eq!(Error::internal("oops").to_string(), "Internal error: oops");
    }
}
