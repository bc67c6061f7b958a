//! MCP server handler.
//!
//! [`McpServer`] owns the tool registry and the rmcp router built from it.
//! The STDIO and TCP transports go through rmcp (`#[tool_handler]`); the HTTP
//! transport calls [`McpServer::list_tools`] and [`McpServer::call_tool`]
//! directly. Both paths end in [`ToolRegistry::dispatch`].

use rmcp::{
    ServerHandler,
    handler::server::tool::ToolRouter,
    model::{CallToolResult, JsonObject, ServerCapabilities, ServerInfo, Tool},
    tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result as CoreResult;
use crate::domains::tools::{ToolRegistry, ToolResult, build_tool_router};

/// Instructions sent to clients on initialize.
pub const SERVER_INSTRUCTIONS: &str = "A toolbox of small stateless utilities: encoding, hashing, \
     text and case conversion, data formats, number bases, colors, JWT inspection, \
     URL/DNS/ping/HTTP lookups and system information. Every tool returns text; \
     failures set isError.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,
    registry: Arc<ToolRegistry>,
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Build the registry and router for `config`.
    pub fn new(config: Config) -> CoreResult<Self> {
        let config = Arc::new(config);
        let registry = Arc::new(ToolRegistry::builtin(config.clone())?);
        info!("Tool registry ready with {} tools", registry.len());

        Ok(Self {
            tool_router: build_tool_router::<Self>(registry.clone()),
            registry,
            config,
        })
    }

    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// Tool metadata for `tools/list` (HTTP transport).
    pub fn list_tools(&self) -> Vec<Tool> {
        self.registry.tools()
    }

    /// Invoke a tool by name (HTTP transport).
    ///
    /// Errors only for unknown tools; tool failures come back as a result
    /// with `is_error` set.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(&self, name: &str, arguments: JsonObject) -> ToolResult<CallToolResult> {
        let outcome = self.registry.dispatch(name, arguments).await?;
        Ok(outcome.into_call_result())
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
