//! Configuration management for the MCP server.
//!
//! Configuration is built from defaults, then overridden by `MCP_*`
//! environment variables (a `.env` file is loaded first when present).
//! Tools only read it; nothing here changes after startup.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Path restrictions for the file tools.
    pub security: SecurityConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for path validation in `file_read` / `file_tail`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Directory the file tools are confined to. `None` means unrestricted.
    pub root_path: Option<PathBuf>,

    /// Whether symlinks may be followed. When false, a symlink is only
    /// accepted if its target also lies under `root_path`.
    pub allow_symlinks: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            root_path: None,
            allow_symlinks: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "toolbox-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            security: SecurityConfig::default(),
        }
    }
}

/// Parse a boolean environment value ("true"/"false", "1"/"0", "yes"/"no").
pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(value) => parse_flag(&value).unwrap_or_else(|| {
            warn!("Ignoring {}={:?}: expected a boolean", name, value);
            default
        }),
        Err(_) => default,
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable | Field |
    /// |---|---|
    /// | `MCP_SERVER_NAME` | `server.name` |
    /// | `MCP_LOG_LEVEL` | `logging.level` |
    /// | `MCP_LOG_TIMESTAMPS` | `logging.with_timestamps` |
    /// | `MCP_ROOT_PATH` | `security.root_path` |
    /// | `MCP_ALLOW_SYMLINKS` | `security.allow_symlinks` |
    ///
    /// Transport variables are read by [`TransportConfig::from_env`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }
        config.logging.with_timestamps =
            env_flag("MCP_LOG_TIMESTAMPS", config.logging.with_timestamps);

        config.transport = TransportConfig::from_env();

        if let Ok(root_path) = std::env::var("MCP_ROOT_PATH") {
            if !root_path.trim().is_empty() {
                config.security.root_path = Some(PathBuf::from(root_path));
                info!(
                    "File tools restricted to {:?}",
                    config.security.root_path
                );
            }
        }
        config.security.allow_symlinks =
            env_flag("MCP_ALLOW_SYMLINKS", config.security.allow_symlinks);

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env var tests must not interleave
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "toolbox-mcp-server");
        assert_eq!(config.server.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.with_timestamps);
        assert!(config.security.root_path.is_none());
        assert!(config.security.allow_symlinks);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_from_env_overrides() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "custom");
            std::env::set_var("MCP_LOG_TIMESTAMPS", "false");
            std::env::set_var("MCP_ROOT_PATH", "/srv/data");
            std::env::set_var("MCP_ALLOW_SYMLINKS", "no");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "custom");
        assert!(!config.logging.with_timestamps);
        assert_eq!(config.security.root_path, Some(PathBuf::from("/srv/data")));
        assert!(!config.security.allow_symlinks);
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
            std::env::remove_var("MCP_LOG_TIMESTAMPS");
            std::env::remove_var("MCP_ROOT_PATH");
            std::env::remove_var("MCP_ALLOW_SYMLINKS");
        }
    }

    #[test]
    fn test_invalid_flag_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_LOG_TIMESTAMPS", "sometimes");
        }
        let config = Config::from_env();
        assert!(config.logging.with_timestamps);
        unsafe {
            std::env::remove_var("MCP_LOG_TIMESTAMPS");
        }
    }
}
