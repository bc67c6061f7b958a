//! Business logic, one module per MCP capability. This server only exposes
//! tools.

pub mod tools;
