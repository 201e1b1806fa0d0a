use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    runn_mcp::cli::run().await
}
