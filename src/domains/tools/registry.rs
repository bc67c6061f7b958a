//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools, built once at startup
//! - Dispatch by tool name (used by every transport)
//! - Tool metadata for listing
//!
//! The registry is populated by an explicit startup routine
//! ([`ToolRegistry::builtin`]) that calls each category's `register`
//! function in a fixed order, and is read-only afterwards.

use std::collections::BTreeMap;
use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use tracing::{info, instrument, warn};

use super::definitions;
use super::descriptor::ToolDescriptor;
use super::error::{ToolError, ToolResult};
use super::handlers::{ToolContext, ToolDefinition};
use super::outcome::ToolOutcome;
use crate::core::config::Config;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - maps tool names to descriptors.
#[derive(Debug)]
pub struct ToolRegistry {
    tools: BTreeMap<String, ToolDescriptor>,
    context: ToolContext,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            tools: BTreeMap::new(),
            context: ToolContext::new(config),
        }
    }

    /// Create a registry holding every built-in tool.
    pub fn builtin(config: Arc<Config>) -> ToolResult<Self> {
        let mut registry = Self::new(config);
        definitions::register_all(&mut registry)?;
        info!("Registered {} tools", registry.len());
        Ok(registry)
    }

    /// Register a descriptor. Last write wins; the replaced descriptor is
    /// returned.
    pub fn register(&mut self, descriptor: ToolDescriptor) -> Option<ToolDescriptor> {
        let name = descriptor.name().to_string();
        let previous = self.tools.insert(name.clone(), descriptor);
        if previous.is_some() {
            warn!("Tool '{}' registered twice; keeping the latest", name);
        }
        previous
    }

    /// Register a tool definition under its own name.
    pub fn register_tool<T: ToolDefinition>(&mut self) -> ToolResult<Option<ToolDescriptor>> {
        Ok(self.register(ToolDescriptor::of::<T>()?))
    }

    /// Register `alias` as another name for `canonical`.
    pub fn register_alias(&mut self, alias: &str, canonical: &str) -> ToolResult<()> {
        let descriptor = self.canonical(canonical)?.alias(alias);
        self.register(descriptor);
        Ok(())
    }

    /// Register `name` as `canonical` with some arguments fixed.
    pub fn register_preset(
        &mut self,
        name: &str,
        canonical: &str,
        description: &str,
        pinned: serde_json::Value,
    ) -> ToolResult<()> {
        let pinned = match pinned {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(ToolError::internal(format!(
                    "preset '{}' pins a non-object value: {}",
                    name, other
                )));
            }
        };
        let descriptor = self.canonical(canonical)?.preset(name, description, pinned);
        self.register(descriptor);
        Ok(())
    }

    fn canonical(&self, name: &str) -> ToolResult<&ToolDescriptor> {
        self.tools
            .get(name)
            .ok_or_else(|| ToolError::unknown_tool(name))
    }

    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Get all tool names, in name order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.values()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Every transport uses this to get tool metadata.
    pub fn tools(&self) -> Vec<Tool> {
        self.tools.values().map(ToolDescriptor::to_tool).collect()
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Fails only with [`ToolError::UnknownTool`]; every handler-level
    /// problem comes back as a failure [`ToolOutcome`].
    #[instrument(skip(self, arguments))]
    pub async fn dispatch(&self, name: &str, arguments: JsonObject) -> ToolResult<ToolOutcome> {
        let Some(descriptor) = self.tools.get(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::unknown_tool(name));
        };

        info!("Dispatching tool call");
        Ok(descriptor.invoke(arguments, self.context.clone()).await)
    }
}
