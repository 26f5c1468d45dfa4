//! UK Police crime-data MCP Server
//!
//! A Model Context Protocol server that exposes the data.police.uk public
//! API to agentic clients like Claude Desktop, Windsurf, and Cursor.
//!
//! # Usage
//!
//! ```bash
//! police-mcp [--base-url <origin>] [--timeout-secs <n>]
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (default: `police_mcp=info`)
//!
//! # Protocol
//!
//! The server communicates via JSON-RPC 2.0 over stdio:
//! - Requests/responses go through stdout
//! - Logs go to stderr (to avoid interfering with the protocol)

use std::time::Duration;

use clap::Parser;
use police_api::{DEFAULT_BASE_URL, PoliceClient};
use police_mcp::PoliceMcpServer;

/// MCP server for the UK Police crime-data API
#[derive(Parser)]
#[command(name = "police-mcp")]
#[command(about = "MCP server for the UK Police crime-data API")]
#[command(version)]
struct Args {
    /// Upstream API origin
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr (stdout is reserved for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("police_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!(base_url = %args.base_url, "Starting police-mcp server");

    let client = PoliceClient::with_base_url(&args.base_url, Duration::from_secs(args.timeout_secs))?;
    let mut server = PoliceMcpServer::new(client);
    server.run().await?;

    Ok(())
}
