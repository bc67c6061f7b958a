//! Toolbox MCP server.
//!
//! A Model Context Protocol server exposing a catalog of small, stateless
//! developer utilities: encoders, hashes, text and data converters, generators,
//! and a handful of network and system lookups.
//!
//! - **core**: configuration, errors, path security, the server handler and
//!   its transports
//! - **domains::tools**: the tool contract, registry and every tool definition
//!
//! # Example
//!
//! ```rust,no_run
//! use toolbox_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
