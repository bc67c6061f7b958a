//! Transport configuration types.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Which transport the server runs on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output (default for MCP).
    #[cfg(feature = "stdio")]
    Stdio,

    /// Line-delimited JSON-RPC over a TCP socket.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// JSON-RPC over HTTP POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

#[cfg(feature = "tcp")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpConfig {
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    /// Path of the JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Allow any origin, for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(feature = "tcp")]
const DEFAULT_TCP_PORT: u16 = 3000;

#[cfg(feature = "http")]
const DEFAULT_HTTP_PORT: u16 = 8080;

#[cfg(any(feature = "tcp", feature = "http"))]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn env_port(name: &str, default: u16) -> u16 {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring {}={:?}: expected a port number", name, value);
            default
        }),
        Err(_) => default,
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            Self::Stdio
        }

        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        {
            Self::Tcp(TcpConfig::default())
        }

        #[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
        {
            Self::Http(HttpConfig::default())
        }

        #[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio, tcp, or http");
        }
    }
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_TCP_PORT,
            host: default_host(),
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_HTTP_PORT,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

impl TransportConfig {
    /// Load from `MCP_TRANSPORT` (`stdio`, `tcp`, `http`) and the
    /// transport-specific `MCP_TCP_*` / `MCP_HTTP_*` variables.
    ///
    /// Unknown or disabled transports fall back to the default.
    pub fn from_env() -> Self {
        let transport = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig {
                port: env_port("MCP_TCP_PORT", DEFAULT_TCP_PORT),
                host: std::env::var("MCP_TCP_HOST").unwrap_or_else(|_| default_host()),
            }),
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig {
                port: env_port("MCP_HTTP_PORT", DEFAULT_HTTP_PORT),
                host: std::env::var("MCP_HTTP_HOST").unwrap_or_else(|_| default_host()),
                rpc_path: std::env::var("MCP_HTTP_PATH").unwrap_or_else(|_| default_rpc_path()),
                enable_cors: std::env::var("MCP_HTTP_CORS")
                    .ok()
                    .and_then(|v| crate::core::config::parse_flag(&v))
                    .unwrap_or_else(default_cors),
            }),
            "" | "stdio" => Self::default(),
            other => {
                warn!("Unknown MCP_TRANSPORT {:?}, using default transport", other);
                Self::default()
            }
        }
    }

    /// Human-readable summary for the startup log.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("TCP on {}:{}", cfg.host, cfg.port),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "stdio")]
    #[test]
    fn test_default_is_stdio() {
        assert!(matches!(TransportConfig::default(), TransportConfig::Stdio));
        assert_eq!(
            TransportConfig::default().description(),
            "STDIO (standard MCP mode)"
        );
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_config_defaults_from_serde() {
        let config: TransportConfig =
            serde_json::from_str(r#"{"type": "http", "port": 9000}"#).unwrap();
        let TransportConfig::Http(http) = &config else {
            panic!("expected HTTP config");
        };
        assert_eq!(http.host, "127.0.0.1");
        assert_eq!(http.rpc_path, "/mcp");
        assert!(http.enable_cors);
        assert_eq!(config.description(), "HTTP on 127.0.0.1:9000/mcp");
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_description() {
        let config = TransportConfig::Tcp(TcpConfig {
            port: 4000,
            host: "0.0.0.0".to_string(),
        });
        assert_eq!(config.description(), "TCP on 0.0.0.0:4000");
    }
}
