//! Platform Version MCP Server
//!
//! Reports the host operating system version via MCP.
//!
//! # Usage
//!
//! Run directly: `platform-version-mcp`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "platform_version": { "command": "./platform-version-mcp" } } }
//! ```

use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use platform_version_mcp::PlatformVersionServer;

/// Logging goes to stderr; stdout is reserved for the MCP protocol.
///
/// Filtering is `RUST_LOG`-based with an `info` default for this crate.
/// Set `LOG_FORMAT=json` for structured JSON output.
fn init_tracing() -> anyhow::Result<()> {
    let filter =
        EnvFilter::from_default_env().add_directive("platform_version_mcp=info".parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    tracing::info!("Starting platform_version MCP Server");

    let server = PlatformVersionServer::new();
    let service = server.serve(rmcp::transport::stdio()).await?;

    tracing::info!("Server running, waiting for requests...");

    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
