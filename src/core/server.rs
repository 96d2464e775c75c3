//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! Prompts, resources and tools are registered in their own domains; adding
//! one does not require modifying this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use crate::domains::{
    prompts::PromptService, resources::ResourceService, tools::build_tool_router,
};

#[cfg(feature = "http")]
use crate::domains::tools::ToolRegistry;

/// Instructions reported to clients on initialization.
pub const SERVER_INSTRUCTIONS: &str = "Serves SAS-to-Python translation prompts. \
    Use prompt sas_to_python_v2 with a sas_code argument for new requests; \
    read prompt://sas-to-python/{version}/{role} for the raw texts; \
    call check_translation_request before sending a hand-built request.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between different domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        let prompt_service = Arc::new(PromptService::new(config.prompts.clone()));
        let prompt_names = prompt_service
            .names()
            .into_iter()
            .map(str::to_string)
            .collect();
        let resource_service = Arc::new(ResourceService::new(
            config.resources.clone(),
            config.server.name.clone(),
            prompt_names,
        ));

        Self {
            tool_router: build_tool_router::<Self>(),
            config,
            resource_service,
            prompt_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router.list_all().iter().map(to_json).collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        ToolRegistry::new()
            .call_tool(name, arguments)
            .map_err(|e| e.to_string())
    }

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        self.resource_service
            .list_resources()
            .await
            .iter()
            .map(to_json)
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(&self, uri: &str) -> Result<serde_json::Value, String> {
        self.resource_service
            .read_resource(uri)
            .await
            .map(|result| to_json(&result))
            .map_err(|e| e.to_string())
    }

    /// List all available resource templates (for HTTP transport).
    pub async fn list_resource_templates(&self) -> Vec<serde_json::Value> {
        self.resource_service
            .list_resource_templates()
            .await
            .iter()
            .map(to_json)
            .collect()
    }

    /// List all available prompts (for HTTP transport).
    pub async fn list_prompts(&self) -> Vec<serde_json::Value> {
        self.prompt_service
            .list_prompts()
            .await
            .iter()
            .map(to_json)
            .collect()
    }

    /// Render a prompt (for HTTP transport). Non-string argument values are
    /// dropped, so a numeric `sas_code` reports as missing.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, String> {
        let args = arguments
            .as_ref()
            .and_then(serde_json::Value::as_object)
            .map(string_arguments);

        self.prompt_service
            .get_prompt(name, args)
            .await
            .map(|result| to_json(&result))
            .map_err(|e| e.to_string())
    }
}

/// Serialize an MCP model value for the JSON-RPC layer.
fn to_json<T: serde::Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        warn!("Failed to serialize MCP payload: {}", e);
        serde_json::Value::Null
    })
}

/// Keep only the string-valued prompt arguments.
fn string_arguments(map: &serde_json::Map<String, serde_json::Value>) -> HashMap<String, String> {
    map.iter()
        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
        .collect()
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        let arguments = request.arguments.as_ref().map(string_arguments);
        self.prompt_service
            .get_prompt(&request.name, arguments)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::PromptsConfig;

    #[test]
    fn test_server_info() {
        let server = McpServer::new(Config::default());
        let info = server.get_info();
        assert_eq!(info.instructions.as_deref(), Some(SERVER_INSTRUCTIONS));
        assert!(info.capabilities.prompts.is_some());
        assert!(info.capabilities.tools.is_some());
    }

    #[tokio::test]
    async fn test_http_prompt_flow() {
        let server = McpServer::new(Config::default());

        let prompts = server.list_prompts().await;
        assert_eq!(prompts.len(), 2);

        let result = server
            .get_prompt(
                "sas_to_python_v2",
                Some(serde_json::json!({ "sas_code": "PROC SORT DATA=a; BY b; RUN;" })),
            )
            .await
            .unwrap();
        let messages = result["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert!(
            messages[1]["content"]["text"]
                .as_str()
                .unwrap()
                .contains("PROC SORT DATA=a; BY b; RUN;")
        );
    }

    #[tokio::test]
    async fn test_http_prompt_missing_argument() {
        let server = McpServer::new(Config::default());
        let err = server.get_prompt("sas_to_python_v2", None).await.unwrap_err();
        assert!(err.contains("sas_code"));
    }

    #[tokio::test]
    async fn test_info_resource_follows_prompt_config() {
        let config = Config {
            prompts: PromptsConfig { include_v1: false },
            ..Config::default()
        };
        let server = McpServer::new(config);

        let result = server.read_resource("mcp://server/info").await.unwrap();
        let text = result["contents"][0]["text"].as_str().unwrap();
        assert!(!text.contains("sas_to_python_v1"));
        assert!(text.contains("sas_to_python_v2"));
    }

    #[tokio::test]
    async fn test_http_prompt_ignores_non_string_arguments() {
        let server = McpServer::new(Config::default());
        let err = server
            .get_prompt("sas_to_python_v2", Some(serde_json::json!({ "sas_code": 42 })))
            .await
            .unwrap_err();
        assert!(err.contains("sas_code"));
    }

    #[tokio::test]
    async fn test_http_resource_listing_uses_mcp_field_names() {
        let server = McpServer::new(Config::default());
        let resources = server.list_resources().await;
        assert_eq!(resources.len(), 5);
        assert!(resources.iter().all(|r| r["mimeType"].is_string()));
    }

    #[tokio::test]
    async fn test_info_resource_reports_configured_name() {
        let mut config = Config::default();
        config.server.name = "sas-prompts-staging".to_string();
        let server = McpServer::new(config);

        let result = server.read_resource("mcp://server/info").await.unwrap();
        let text = result["contents"][0]["text"].as_str().unwrap();
        let info: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(info["server"], server.name());
        assert_eq!(info["server"], "sas-prompts-staging");
    }

    #[test]
    fn test_list_tools() {
        let server = McpServer::new(Config::default());
        let tools = server.list_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], "check_translation_request");
    }
}
