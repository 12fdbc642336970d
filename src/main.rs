//! Todo MCP - minimal in-memory todo list served over MCP stdio
//!
//! Todos live in process memory and are lost when the server exits.

mod handlers;
mod params;
mod result;
mod server;
mod store;
mod types;

use rmcp::{transport::io::stdio, ServiceExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use server::TodoMcpServer;

/// Initialize logging to stderr (stdout is reserved for the MCP protocol).
///
/// Set `LOG_FORMAT=json` for structured JSON output; default is
/// human-readable text without ANSI colors.
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("todo_mcp=info".parse()?);

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

    tracing::info!("Starting Todo MCP server");

    let server = TodoMcpServer::new();
    let service = server.serve(stdio()).await?;

    tracing::info!("Todo MCP server running");

    service.waiting().await?;

    tracing::info!("Todo MCP server stopped");

    Ok(())
}
