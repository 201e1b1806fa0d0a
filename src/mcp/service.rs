//! MCP transports
//!
//! Streamable HTTP (nested into an Axum router) and stdio.

use std::sync::Arc;

use rmcp::{
    ServiceExt,
    transport::{
        stdio,
        streamable_http_server::{
            StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
        },
    },
};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::Config;
use crate::runn::Transport;

use super::server::RunnMcpServer;

/// Create MCP Streamable HTTP service
///
/// A fresh [`RunnMcpServer`] is built per session; the transport and config
/// are shared.
pub fn create_mcp_service<T: Transport + 'static>(
    transport: Arc<T>,
    config: Arc<Config>,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<RunnMcpServer<T>, LocalSessionManager> {
    // Note: Returns io::Error to match rmcp's expected signature
    let service_factory = move || -> Result<RunnMcpServer<T>, std::io::Error> {
        Ok(RunnMcpServer::new(Arc::clone(&transport), Arc::clone(&config)))
    };

    let config = StreamableHttpServerConfig::default()
        .with_stateful_mode(true)
        .with_cancellation_token(cancellation_token);

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}

/// Serve MCP over stdin/stdout until the client disconnects.
pub async fn serve_stdio<T: Transport + 'static>(
    transport: Arc<T>,
    config: Arc<Config>,
) -> Result<(), std::io::Error> {
    let server = RunnMcpServer::new(transport, config);
    let service = server.serve(stdio()).await.map_err(std::io::Error::other)?;
    info!("MCP server running on stdio");

    let reason = service.waiting().await.map_err(std::io::Error::other)?;
    info!(?reason, "MCP stdio session ended");
    Ok(())
}
