mod config;
mod tools;
pub mod server;

pub use config::{DEFAULT_SERVER_NAME, DEFAULT_SERVER_VERSION, ServerConfig};
pub use server::McpServer;
pub use tools::{EchoHandler, ToolError, ToolHandler, ToolRegistry};

use std::sync::Arc;

/// Convenience function to create a fully configured MCP server.
///
/// Registers the default tools and returns a McpServer that implements
/// rmcp's ServerHandler.
pub fn create_server(config: ServerConfig) -> McpServer {
    let tool_registry = Arc::new(ToolRegistry::with_default_tools());
    McpServer::new(config, tool_registry)
}
