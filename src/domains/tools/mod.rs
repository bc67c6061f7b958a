//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are small, stateless functions that MCP clients call to convert,
//! compute or look something up and get a text result back.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations, grouped by category
//! - `schema.rs` - Input schemas derived from params (listing + validation)
//! - `handlers.rs` - The `ToolDefinition` contract
//! - `descriptor.rs` - Type-erased registry entries, aliases and presets
//! - `outcome.rs` - The success/failure result envelope
//! - `registry.rs` - Central tool registry and dispatch
//! - `router.rs` - rmcp ToolRouter built from the registry
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in the matching `definitions/<category>/` directory
//! 2. Define a params struct and implement `ToolDefinition`
//! 3. Register it in the category's `register()` function
//!
//! **No need to modify `server.rs`, `router.rs` or any transport!**

pub mod definitions;
mod descriptor;
mod error;
mod handlers;
mod outcome;
mod registry;
pub mod router;
pub mod schema;

pub use descriptor::ToolDescriptor;
pub use error::{ToolError, ToolResult};
pub use handlers::{NoParams, ToolContext, ToolDefinition, network_failure};
pub use outcome::ToolOutcome;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
pub use schema::{InputSchema, ValidationError};
