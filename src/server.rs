//! MCP server implementation using rmcp.
//!
//! Answers `initialize`, `ping`, `tools/list` and `tools/call`; everything
//! else falls through to rmcp's defaults.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError,
    handler::server::ServerHandler,
    model::*,
    service::{RequestContext, RoleServer},
};

use crate::config::ServerConfig;
use crate::tools::ToolRegistry;

/// MCP server that handles protocol requests and delegates to tool handlers.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<ServerConfig>,
    tool_registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server with the given identity and tool registry.
    pub fn new(config: ServerConfig, tool_registry: Arc<ToolRegistry>) -> Self {
        Self {
            config: Arc::new(config),
            tool_registry,
        }
    }
}

impl ServerHandler for McpServer {
    fn ping(
        &self,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<(), McpError>> + Send + '_ {
        std::future::ready(Ok(()))
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        // Single static page; cursors are ignored.
        let result = ListToolsResult::with_all_items(self.tool_registry.list_tools());
        std::future::ready(Ok(result))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        let tool_name = request.name.to_string();
        let args = request.arguments.unwrap_or_default();
        let registry = self.tool_registry.clone();

        async move {
            tracing::debug!(tool = %tool_name, "Handling tool call");

            registry.call_tool(&tool_name, args).await.map_err(|e| {
                tracing::debug!("Tool call rejected: {}", e);
                e.to_mcp_error()
            })
        }
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: self.config.implementation(),
            instructions: self.config.instructions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::service::{RoleClient, RunningService, ServiceError, ServiceExt};
    use serde_json::json;

    fn test_server() -> McpServer {
        McpServer::new(
            ServerConfig::new("test-server", "0.0.1"),
            Arc::new(ToolRegistry::with_default_tools()),
        )
    }

    /// Serve `test_server()` over a duplex pipe and connect a bare client to it.
    async fn connect() -> RunningService<RoleClient, ()> {
        let (client_stream, server_stream) = tokio::io::duplex(4096);

        let (server_read, server_write) = tokio::io::split(server_stream);
        let (client_read, client_write) = tokio::io::split(client_stream);

        tokio::spawn(async move {
            let running = test_server()
                .serve((server_read, server_write))
                .await
                .unwrap();
            let _ = running.waiting().await;
        });

        ().serve((client_read, client_write)).await.unwrap()
    }

    fn call(request: serde_json::Value) -> CallToolRequestParams {
        serde_json::from_value(request).unwrap()
    }

    #[test]
    fn test_get_info_advertises_tools_only() {
        let info = test_server().get_info();
        assert_eq!(info.server_info.name, "test-server");
        assert_eq!(info.server_info.version, "0.0.1");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_none());
        assert!(info.capabilities.resources.is_none());
    }

    #[tokio::test]
    async fn test_handshake_reports_identity() {
        let client = connect().await;

        let peer_info = client.peer_info().cloned().unwrap();
        assert_eq!(peer_info.server_info.name, "test-server");
        assert!(peer_info.capabilities.tools.is_some());

        client.cancel().await.unwrap();
    }

    #[tokio::test]
    async fn test_list_tools_over_transport() {
        let client = connect().await;

        for _ in 0..2 {
            let tools = client.list_tools(Default::default()).await.unwrap();
            assert_eq!(tools.tools.len(), 1);
            assert_eq!(tools.tools[0].name, "echo");
            assert!(tools.next_cursor.is_none());
        }

        client.cancel().await.unwrap();
    }

    #[tokio::test]
    async fn test_echo_over_transport() {
        let client = connect().await;

        let result = client
            .call_tool(call(json!({ "name": "echo", "arguments": { "message": "hi" } })))
            .await
            .unwrap();
        assert_eq!(
            serde_json::to_value(&result.content).unwrap(),
            json!([{ "type": "text", "text": "Echo: hi" }])
        );

        let result = client
            .call_tool(call(json!({ "name": "echo" })))
            .await
            .unwrap();
        assert_eq!(
            serde_json::to_value(&result.content).unwrap(),
            json!([{ "type": "text", "text": "Echo: " }])
        );

        client.cancel().await.unwrap();
    }

    #[tokio::test]
    async fn test_unknown_tool_keeps_session_alive() {
        let client = connect().await;

        match client.call_tool(call(json!({ "name": "bogus" }))).await {
            Err(ServiceError::McpError(e)) => {
                assert_eq!(e.code, ErrorCode::INTERNAL_ERROR);
                assert_eq!(e.message, "Unknown tool: bogus");
            }
            other => panic!("Expected an MCP error, got {:?}", other),
        }

        // Same session keeps answering
        let result = client
            .call_tool(call(json!({ "name": "echo", "arguments": { "message": "still here" } })))
            .await
            .unwrap();
        assert_eq!(
            serde_json::to_value(&result.content).unwrap(),
            json!([{ "type": "text", "text": "Echo: still here" }])
        );

        client.cancel().await.unwrap();
    }
}
