//! Tool Registry - HTTP dispatch for all tools.
//!
//! The STDIO/TCP transports route calls through the rmcp `ToolRouter`; the
//! HTTP transport has no router and dispatches by name here instead.

use tracing::warn;

use super::definitions::CheckRequestTool;
use super::error::ToolError;

/// Tool registry - maps tool names to their HTTP handlers.
#[derive(Debug, Default)]
pub struct ToolRegistry;

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            CheckRequestTool::NAME => CheckRequestTool::http_handler(arguments),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
