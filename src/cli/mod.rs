mod commands;
pub mod error;
mod utils;

#[cfg(test)]
mod utils_test;

use std::net::IpAddr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::http::{DEFAULT_PORT, HttpConfig};
use crate::runn::{Credential, HttpTransport, RunnClient, StopRule};

pub use commands::serve::TransportMode;

#[derive(Parser, Debug)]
#[command(name = "runn-mcp")]
#[command(author, version, about = "MCP server for the Runn API", long_about = None)]
pub struct Cli {
    /// Override the API URL (default: RUNN_API_URL env or https://api.runn.io)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Default API key (default: RUNN_API_KEY env)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Records requested per page
    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    /// When to stop paginating
    #[arg(long, global = true, value_enum)]
    pub stop_rule: Option<StopRule>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the MCP server
    Serve {
        /// MCP transport
        #[arg(long, value_enum, default_value_t = TransportMode::StreamableHttp)]
        transport: TransportMode,
        /// Host address to bind to (streamable-http only)
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        /// Port to listen on (streamable-http only)
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Print billable hours per project, person and month
    Report {
        /// First day to include (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,
        /// Last day to include (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
        /// Only rows for this project
        #[arg(long)]
        project_id: Option<i64>,
        /// Only rows for this person
        #[arg(long)]
        person_id: Option<i64>,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

impl Cli {
    /// Environment configuration overlaid with command line flags.
    pub fn config(&self) -> Config {
        let mut config = Config::from_env();
        if let Some(url) = &self.api_url {
            config = config.with_api_url(url.trim_end_matches('/'));
        }
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key.as_str());
        }
        if let Some(page_size) = self.page_size {
            config = config.with_page_size(page_size);
        }
        if let Some(stop_rule) = self.stop_rule {
            config = config.with_stop_rule(stop_rule);
        }
        config
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "runn_mcp=info,tower_http=info",
        1 => "runn_mcp=debug,tower_http=debug,rmcp=debug",
        _ => "runn_mcp=trace,tower_http=trace,rmcp=trace",
    };
    // stdout carries the stdio transport, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // reqwest is built without a default crypto provider.
    let _ = rustls::crypto::ring::default_provider().install_default();

    let config = cli.config();

    match cli.command {
        Commands::Serve {
            transport,
            host,
            port,
        } => {
            commands::serve::run(transport, HttpConfig { host, port }, config).await?;
            Ok(())
        }
        Commands::Report {
            start,
            end,
            project_id,
            person_id,
            format,
        } => {
            let credential = Credential::resolve(None, config.api_key.as_ref())?;
            let transport = Arc::new(
                HttpTransport::new(config.api_url.clone(), config.accept_version.clone())?,
            );
            let client = RunnClient::new(transport, credential)
                .with_page_size(config.page_size)
                .with_stop_rule(config.stop_rule);

            let output = commands::report::billable_hours(
                &client,
                start.as_deref(),
                end.as_deref(),
                project_id,
                person_id,
                &format,
            )
            .await?;
            println!("{}", output);
            Ok(())
        }
    }
}
