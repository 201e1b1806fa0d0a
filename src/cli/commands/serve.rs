//! MCP server command

use std::sync::Arc;

use clap::ValueEnum;
use tracing::info;

use crate::cli::error::{CliError, CliResult};
use crate::config::Config;
use crate::http::{self, HttpConfig};
use crate::mcp::serve_stdio;
use crate::runn::HttpTransport;

/// MCP transport selected at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TransportMode {
    /// Streamable HTTP, mounted at /mcp
    #[default]
    StreamableHttp,
    /// JSON-RPC over stdin/stdout
    Stdio,
}

/// Run the MCP server on the selected transport
pub async fn run(mode: TransportMode, http_config: HttpConfig, config: Config) -> CliResult<()> {
    let transport = Arc::new(HttpTransport::new(
        config.api_url.clone(),
        config.accept_version.clone(),
    )?);
    if config.api_key.is_none() {
        info!("No default API key configured; every tool call must pass api_key");
    }
    let config = Arc::new(config);

    match mode {
        TransportMode::StreamableHttp => {
            info!(api_url = %config.api_url, "Starting MCP server (streamable-http)");
            http::run(http_config, transport, config).await?;
        }
        TransportMode::Stdio => {
            info!(api_url = %config.api_url, "Starting MCP server (stdio)");
            serve_stdio(transport, config)
                .await
                .map_err(CliError::Stdio)?;
        }
    }
    Ok(())
}
