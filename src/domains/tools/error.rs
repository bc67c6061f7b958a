//! Tool-specific error types.

use thiserror::Error;

use super::schema::ValidationError;

/// Result type for tool operations.
pub type ToolResult<T> = std::result::Result<T, ToolError>;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments failed the tool's declared input schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Arguments passed the schema but are still unusable.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A numeric input could not be parsed.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// A structured input (token, numeral, color, ...) is malformed.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// The underlying computation or external call failed.
    #[error("{0}")]
    ExecutionFailed(String),

    /// The tool timed out during execution.
    #[error("timed out after {0} seconds")]
    Timeout(u64),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "invalid number" error.
    pub fn invalid_number(msg: impl Into<String>) -> Self {
        Self::InvalidNumber(msg.into())
    }

    /// Create a new "invalid format" error.
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    /// Wrap any displayable library error as an execution failure.
    ///
    /// Intended for `map_err(ToolError::execution)`.
    pub fn execution(err: impl std::fmt::Display) -> Self {
        Self::ExecutionFailed(err.to_string())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
