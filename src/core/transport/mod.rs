//! Transports the server can run on.
//!
//! - **STDIO** (feature `stdio`, default): one client on stdin/stdout
//! - **TCP** (feature `tcp`): line-delimited JSON-RPC, one session per connection
//! - **HTTP** (feature `http`): JSON-RPC over POST, plus a health endpoint
//!
//! All of them share one [`McpServer`](crate::core::McpServer) and its tool
//! registry.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
