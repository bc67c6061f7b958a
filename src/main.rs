//! Server entry point: load configuration, set up logging, run the
//! configured transport.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use toolbox_mcp_server::core::{Config, McpServer, TransportService, config::LoggingConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = McpServer::new(config.clone())?;

    info!("Server initialized with {} tools", server.registry().len());

    TransportService::new(config.transport).run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Logs go to stderr; stdout belongs to the STDIO transport.
fn init_logging(logging: &LoggingConfig) {
    let level = match logging.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if logging.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
