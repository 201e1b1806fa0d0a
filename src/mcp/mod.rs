//! Model Context Protocol (MCP) server implementation
//!
//! Exposes the Runn API as MCP tools over Streamable HTTP or stdio.
//!
//! - **server**: [`RunnMcpServer`], registers every tool
//! - **tools**: one struct per upstream resource, generic over
//!   `T: Transport` (no dynamic dispatch)
//! - **service**: transport wiring

pub mod server;
mod service;
pub mod tools;


pub use server::RunnMcpServer;
pub use service::{create_mcp_service, serve_stdio};
