//! HTTP host for the Streamable HTTP MCP transport.

mod health;
mod routes;


use std::net::IpAddr;
use std::sync::Arc;

use miette::Diagnostic;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::runn::Transport;

pub use health::HealthResponse;
pub use routes::create_router;

/// Default port of the Streamable HTTP transport.
pub const DEFAULT_PORT: u16 = 8000;

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Error, Diagnostic, Debug)]
pub enum HttpError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(runn_mcp::http::bind),
        help("Is another process already listening on this port? Try --port.")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server error: {0}")]
    #[diagnostic(code(runn_mcp::http::serve))]
    Serve(#[source] std::io::Error),
}

/// Serve MCP over Streamable HTTP until Ctrl-C.
pub async fn run<T: Transport + 'static>(
    http: HttpConfig,
    transport: Arc<T>,
    config: Arc<Config>,
) -> Result<(), HttpError> {
    let ct = CancellationToken::new();
    let app = create_router(transport, config, ct.clone()).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", http.host, http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HttpError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!("MCP server listening on http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
            ct.cancel();
        })
        .await
        .map_err(HttpError::Serve)
}
