//! Route configuration.

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio_util::sync::CancellationToken;

use super::health::health;
use crate::config::Config;
use crate::mcp::create_mcp_service;
use crate::runn::Transport;

/// `/health` plus the MCP service nested at `/mcp`.
pub fn create_router<T: Transport + 'static>(
    transport: Arc<T>,
    config: Arc<Config>,
    cancellation_token: CancellationToken,
) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest_service(
            "/mcp",
            create_mcp_service(transport, config, cancellation_token),
        )
}
