//! MCP Server Binary Entry Point
//!
//! This binary implements a JSON-RPC 2.0 server over stdin/stdout
//! following the Model Context Protocol (MCP) specification.

use clap::Parser;
use guide_config::Config;
use guide_mcp::McpServer;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tokio::runtime::Runtime;

#[derive(Parser)]
#[command(
    name = "guide_mcp",
    version,
    about = "MCP server that reads the Swift API Design Guidelines"
)]
struct Cli {
    /// Enable verbose/debug logging
    #[arg(long)]
    verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    json_logs: bool,

    /// Config file to use instead of <workspace>/.guide/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing to stderr only (stdout reserved for JSON-RPC)
    guide_common::telemetry::init_tracing(cli.verbose, cli.json_logs);

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load(&Config::workspace_root()?)?,
    };
    tracing::info!(url = %config.source.url, tool = %config.server.tool_name, "Guidelines MCP server starting...");

    let server = McpServer::from_config(&config)?;

    // Create tokio runtime for async operations
    let rt = Runtime::new()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut stdout_lock = stdout.lock();

    // Read requests from stdin line by line
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::error!("Error reading stdin: {}", e);
                break;
            }
        };

        // Skip empty lines
        if line.trim().is_empty() {
            continue;
        }

        tracing::debug!("Received: {}", line);

        let Some(response_json) = rt.block_on(server.handle_line(&line)) else {
            continue;
        };

        tracing::debug!("Sending: {}", response_json);

        if let Err(e) = writeln!(stdout_lock, "{}", response_json) {
            tracing::error!("Failed to write response: {}", e);
            break;
        }

        if let Err(e) = stdout_lock.flush() {
            tracing::error!("Failed to flush stdout: {}", e);
            break;
        }
    }

    tracing::info!("Guidelines MCP server shutting down");
    Ok(())
}
