use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoUtc;
use mcp_inspector_tutorial::{
    DEFAULT_SERVER_NAME, DEFAULT_SERVER_VERSION, ServerConfig, create_server,
};

use rmcp::service::ServiceExt;
use rmcp::transport::stdio;

/// Target for the readiness notice and fatal errors. Always enabled at
/// `info`, whatever `--log-level` says.
const STARTUP_TARGET: &str = "mcp_inspector_tutorial::startup";

#[derive(Parser)]
#[command(name = "mcp-inspector-tutorial")]
#[command(about = "Single-tool MCP server for trying out the MCP Inspector over stdio")]
struct Cli {
    /// Server name reported to clients during initialize
    #[arg(long, env = "MCP_SERVER_NAME", default_value = DEFAULT_SERVER_NAME)]
    name: String,
    /// Server version reported to clients during initialize
    #[arg(long, env = "MCP_SERVER_VERSION", default_value = DEFAULT_SERVER_VERSION)]
    server_version: String,
    /// Log level for this crate (trace, debug, info, warn, error)
    #[arg(long, env = "MCP_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the protocol, so all diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("mcp_inspector_tutorial={}", cli.log_level).parse()?)
                .add_directive(format!("{}=info", STARTUP_TARGET).parse()?)
                .add_directive("rmcp=warn".parse()?),
        )
        .with_timer(ChronoUtc::rfc_3339())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    if let Err(e) = run(ServerConfig::new(cli.name, cli.server_version)).await {
        error!(target: STARTUP_TARGET, "Server error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Connect to the stdio transport and serve until the client closes the session.
async fn run(config: ServerConfig) -> Result<()> {
    let service = create_server(config).serve(stdio()).await?;

    info!(target: STARTUP_TARGET, "MCP Inspector Tutorial server running on stdio");

    let reason = service.waiting().await?;
    info!("MCP session ended: {:?}", reason);

    Ok(())
}
