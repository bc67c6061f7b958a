//! TCP transport: line-delimited JSON-RPC, one rmcp service per connection.
//!
//! Every connection shares the same [`McpServer`] (and so the same tool
//! registry); the server is cheap to clone.

use rmcp::ServiceExt;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// Pause after a failed `accept` so persistent errors do not spin.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Accept connections forever.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {} (JSON-RPC over TCP)", addr);

        loop {
            match listener.accept().await {
                Ok((stream, peer)) => {
                    if let Err(e) = stream.set_nodelay(true) {
                        warn!("Failed to set TCP_NODELAY for {}: {}", peer, e);
                    }
                    tokio::spawn(serve_connection(server.clone(), stream, peer));
                }
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                }
            }
        }
    }
}

async fn serve_connection(server: McpServer, stream: TcpStream, peer: SocketAddr) {
    info!("Client {} connected", peer);
    let service = match server.serve(stream).await {
        Ok(service) => service,
        Err(e) => {
            warn!("Handshake with {} failed: {}", peer, e);
            return;
        }
    };

    match service.waiting().await {
        Ok(reason) => info!("Client {} disconnected ({:?})", peer, reason),
        Err(e) => warn!("Error while serving {}: {}", peer, e),
    }
}
