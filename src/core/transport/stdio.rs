//! STDIO transport: the default MCP mode. Logs go to stderr so stdout stays
//! reserved for protocol messages.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

pub struct StdioTransport;

impl StdioTransport {
    /// Serve a single client on stdin/stdout until it disconnects.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("STDIO client disconnected");
        Ok(())
    }
}
