//! Upstream client error types.
//!
//! Every failure an operation against the Runn API can produce. Nothing here
//! is retried; errors propagate unchanged to the tool caller.

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced by the Runn client and the report builder.
#[derive(Error, Diagnostic, Debug)]
pub enum RunnError {
    #[error("Authentication error: {message}")]
    #[diagnostic(
        code(runn_mcp::runn::authentication),
        help("Pass an api_key argument or set RUNN_API_KEY before starting the server.")
    )]
    Authentication { message: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(runn_mcp::runn::validation))]
    Validation { message: String },

    #[error("Upstream error ({}): {body}", status_label(*status))]
    #[diagnostic(code(runn_mcp::runn::upstream))]
    Upstream { status: Option<u16>, body: String },

    #[error("Could not decode upstream response: {message}")]
    #[diagnostic(
        code(runn_mcp::runn::decode),
        help("The Runn API returned data in an unexpected format.")
    )]
    Decode { message: String },
}

impl RunnError {
    pub fn validation(message: impl Into<String>) -> Self {
        RunnError::Validation {
            message: message.into(),
        }
    }
}

fn status_label(status: Option<u16>) -> String {
    status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "no response".to_string())
}

impl From<reqwest::Error> for RunnError {
    fn from(e: reqwest::Error) -> Self {
        RunnError::Upstream {
            status: e.status().map(|s| s.as_u16()),
            body: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for RunnError {
    fn from(e: serde_json::Error) -> Self {
        RunnError::Decode {
            message: e.to_string(),
        }
    }
}

/// Result type for Runn client operations.
pub type RunnResult<T> = Result<T, RunnError>;
