//! The contract every tool implements.
//!
//! A tool is a unit struct implementing [`ToolDefinition`]: static metadata,
//! a parameter struct deriving `JsonSchema` (its schema is the tool's input
//! schema), and an async `execute`. Validation, deserialization and
//! error-to-envelope conversion happen once, in
//! [`ToolDescriptor::of`](super::ToolDescriptor::of), so individual tools
//! only describe and compute.

use std::sync::Arc;

use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use super::error::{ToolError, ToolResult};
use super::outcome::ToolOutcome;
use crate::core::config::Config;

/// Shared, read-only state handed to every invocation.
#[derive(Debug, Clone)]
pub struct ToolContext {
    config: Arc<Config>,
}

impl ToolContext {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for ToolContext {
    fn default() -> Self {
        Self::new(Arc::new(Config::default()))
    }
}

/// A single named tool.
#[async_trait::async_trait]
pub trait ToolDefinition: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Gerund phrase used in failure text: `"Error {ACTION}: ..."`.
    const ACTION: &'static str;

    /// Typed parameters. Their schemars schema is published as the input
    /// schema and checked before deserialization.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// JSON Schema of the structured content, for tools that return one.
    fn output_schema() -> Option<Arc<JsonObject>> {
        None
    }

    /// Run the tool.
    async fn execute(params: Self::Params, ctx: &ToolContext) -> ToolResult<ToolOutcome>;

    /// Render an execution error as user-facing failure text.
    fn failure_message(error: &ToolError) -> String {
        format!("Error {}: {}", Self::ACTION, error)
    }
}

/// Failure text for network-utility tools: `"<verb> failed: ..."`.
pub fn network_failure(verb: &str, error: &ToolError) -> String {
    format!("{} failed: {}", verb, error)
}

/// Parameters for tools that take none.
#[derive(Debug, Clone, Default, serde::Deserialize, JsonSchema)]
pub struct NoParams {}
