//! Error types for tool dispatch.

use std::fmt;

/// Errors raised while dispatching a `tools/call` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// The requested tool name is not present in the registry.
    UnknownTool(String),
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTool(name) => write!(f, "Unknown tool: {}", name),
        }
    }
}

impl std::error::Error for ToolError {}

impl ToolError {
    /// Convert this error to an MCP ErrorData for protocol responses.
    ///
    /// Unknown tools surface as an internal error (-32603) carrying the
    /// display text, so the client sees `Unknown tool: <name>`.
    pub fn to_mcp_error(&self) -> rmcp::ErrorData {
        match self {
            Self::UnknownTool(_) => rmcp::ErrorData::internal_error(self.to_string(), None),
        }
    }
}
