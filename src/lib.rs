pub mod cli;
pub mod config;
pub mod http;
pub mod mcp;
pub mod report;
pub mod runn;
