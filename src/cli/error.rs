use miette::Diagnostic;
use thiserror::Error;

use crate::http::HttpError;
use crate::runn::RunnError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Runn(#[from] RunnError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Http(#[from] HttpError),

    #[error("MCP stdio transport failed: {0}")]
    #[diagnostic(code(runn_mcp::cli::stdio))]
    Stdio(#[source] std::io::Error),

    #[error("Failed to render output: {message}")]
    #[diagnostic(code(runn_mcp::cli::output))]
    Output { message: String },
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
