//! Network tools: URL parsing, DNS, ping, HTTP.

pub mod dns;
pub mod http;
pub mod ping;
pub mod url_parse;

pub use dns::DnsLookupTool;
pub use self::http::HttpRequestTool;
pub use ping::PingTool;
pub use url_parse::UrlParseTool;

use crate::domains::tools::{ToolDefinition, ToolRegistry, ToolResult};

pub fn register(registry: &mut ToolRegistry) -> ToolResult<()> {
    registry.register_tool::<UrlParseTool>()?;
    registry.register_tool::<DnsLookupTool>()?;
    registry.register_tool::<PingTool>()?;
    registry.register_tool::<HttpRequestTool>()?;

    registry.register_alias("curl", HttpRequestTool::NAME)?;
    Ok(())
}
