//! Translation request check tool definition.
//!
//! Reports whether a request text still carries the SAS placeholder, i.e.
//! whether it would reach the model without any SAS source in it.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument, warn};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

use crate::domains::prompts::{ExampleRequest, PLACEHOLDER};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the request check tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CheckRequestParams {
    /// The user message about to be sent to the model.
    pub text: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Request check tool - flags unresolved placeholders.
pub struct CheckRequestTool;

impl CheckRequestTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "check_translation_request";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Check a SAS-to-Python translation request before sending it. Fails if the SAS placeholder has not been replaced with source code.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(len = params.text.len()))]
    pub fn execute(params: &CheckRequestParams) -> CallToolResult {
        info!("Check request tool called");

        if params.text.trim().is_empty() {
            warn!("Empty request text");
            return CallToolResult::error(vec![Content::text("Request text is empty")]);
        }

        let request = ExampleRequest::new(params.text.as_str());
        let count = request.placeholder_count();

        if count > 0 {
            warn!("Request still contains {} placeholder(s)", count);
            return CallToolResult::error(vec![Content::text(format!(
                "Unresolved placeholder: {} found {} time(s). Replace it with the SAS source before sending.",
                PLACEHOLDER, count
            ))]);
        }

        CallToolResult::success(vec![Content::text(
            "Request is ready: no unresolved placeholder found.",
        )])
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let params: CheckRequestParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        info!("Check request tool (HTTP) called");

        let result = Self::execute(&params);

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CheckRequestParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: CheckRequestParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
