use rmcp::model::Implementation;

pub const DEFAULT_SERVER_NAME: &str = "mcp-inspector-tutorial";
pub const DEFAULT_SERVER_VERSION: &str = "0.1.0";

const DEFAULT_INSTRUCTIONS: &str =
    "Tutorial server for the MCP Inspector. Exposes a single `echo` tool that \
     returns the provided message prefixed with `Echo: `.";

/// Identity and runtime settings for the MCP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Server name reported in the `initialize` response.
    pub name: String,
    /// Server version reported in the `initialize` response.
    pub version: String,
    /// Usage hint returned as `instructions` in the `initialize` response.
    pub instructions: Option<String>,
}

impl ServerConfig {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ..Default::default()
        }
    }

    /// Build the `serverInfo` block advertised to clients.
    pub fn implementation(&self) -> Implementation {
        Implementation {
            name: self.name.clone(),
            version: self.version.clone(),
            title: None,
            icons: None,
            website_url: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
            version: DEFAULT_SERVER_VERSION.to_string(),
            instructions: Some(DEFAULT_INSTRUCTIONS.to_string()),
        }
    }
}
