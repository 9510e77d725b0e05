//! linkcard MCP server entry point.
//!
//! This is the main binary that boots the MCP server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use std::sync::Arc;

use anyhow::Result;
use linkcard_client::{FetchConfig, HttpTransport, LinkPreviewer};
use linkcard_core::AppConfig;
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

mod error;
mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;
    let transport = HttpTransport::new(FetchConfig::from(&config))?;
    let previewer = LinkPreviewer::new(Arc::new(transport));

    tracing::info!(user_agent = %config.user_agent, "Starting linkcard server on stdio transport");

    let handler = handler::LinkCardServer::new(previewer, config);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}
