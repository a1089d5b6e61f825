//! Tool handler registry and the tools this server exposes.
//!
//! `ToolRegistry` owns the static tool list and dispatches `tools/call`
//! requests by name, so the `ServerHandler` implementation stays free of
//! per-tool logic.

mod error;
mod registry;

pub use error::ToolError;
pub use registry::{ToolHandler, ToolRegistry};

// Tool handler implementations
mod echo;

pub use echo::EchoHandler;
