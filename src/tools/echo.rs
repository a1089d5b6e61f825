//! Handler for the `echo` tool.
//!
//! Returns the `message` argument prefixed with `Echo: `.

use std::future::Future;
use std::pin::Pin;

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde_json::{Value, json};

use crate::tools::{ToolError, ToolHandler};

/// Handler for the `echo` tool.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoHandler;

impl EchoHandler {
    pub fn new() -> Self {
        Self
    }

    /// Build the input schema for this tool.
    fn input_schema(&self) -> JsonObject {
        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), json!("object"));

        let mut properties = serde_json::Map::new();
        properties.insert(
            "message".to_string(),
            json!({
                "type": "string",
                "description": "The message to echo back"
            }),
        );

        schema.insert("properties".to_string(), json!(properties));
        schema.insert("required".to_string(), json!(["message"]));
        schema
    }
}

/// Extract the message to echo.
///
/// Anything other than a JSON string (missing, null, numbers, objects, ...)
/// becomes the empty string.
fn message_arg(args: &JsonObject) -> &str {
    match args.get("message") {
        Some(Value::String(message)) => message,
        _ => "",
    }
}

impl ToolHandler for EchoHandler {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Echoes back the provided message"
    }

    fn input_schema(&self) -> JsonObject {
        self.input_schema()
    }

    fn execute(
        &self,
        args: JsonObject,
    ) -> Pin<Box<dyn Future<Output = Result<CallToolResult, ToolError>> + Send + '_>> {
        let text = format!("Echo: {}", message_arg(&args));
        Box::pin(async move { Ok(CallToolResult::success(vec![Content::text(text)])) })
    }
}
