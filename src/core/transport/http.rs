//! HTTP transport implementation.
//!
//! HTTP server with JSON-RPC over POST requests.
//! This allows standard HTTP clients (curl, browsers, etc.) to communicate with the MCP server.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::core::server::SERVER_INSTRUCTIONS;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<serde_json::Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Method not found error.
    pub fn method_not_found(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32601, "Method not found")
    }

    /// Invalid request error.
    pub fn invalid_request(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The MCP server instance.
    server: McpServer,
    /// Session state for maintaining conversation context.
    session: Arc<RwLock<Option<SessionState>>>,
}

/// Session state for a client.
#[derive(Debug, Clone)]
struct SessionState {
    initialized: bool,
}

/// MCP protocol revision spoken by the HTTP transport.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// MCP error code for an unknown resource URI.
const RESOURCE_NOT_FOUND: i32 = -32002;

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let state = AppState {
            server,
            session: Arc::new(RwLock::new(None)),
        };

        // Build router
        let rpc_path = self.config.rpc_path.clone();
        let mut app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(move || root_handler(rpc_path)))
            .with_state(state);

        // Add CORS if enabled
        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "Ready - listening on {} (JSON-RPC over HTTP, CORS {})",
            addr, cors_status
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Root handler - provides API info.
async fn root_handler(rpc_path: String) -> impl IntoResponse {
    let documentation = format!("Send POST requests to {} with JSON-RPC messages", rpc_path);
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "transport": "HTTP",
        "endpoints": {
            "rpc": rpc_path,
            "health": "/health"
        },
        "protocol": "JSON-RPC 2.0",
        "documentation": documentation
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle JSON-RPC requests.
#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    tracing::Span::current().record("method", &request.method);
    info!("Received JSON-RPC request: {}", request.method);

    let response = process_request(&state, request).await;

    (StatusCode::OK, Json(response))
}

/// Process a JSON-RPC request and return the response.
async fn process_request(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::invalid_request(request.id);
    }

    if let Some(event) = request.method.strip_prefix("notifications/") {
        handle_notification(state, event).await;
        return JsonRpcResponse::success(request.id, serde_json::Value::Null);
    }

    if request.method != "initialize" && !state.is_initialized().await {
        debug!("{} received before initialize", request.method);
    }

    let params = request.params.unwrap_or(serde_json::Value::Null);
    let outcome = match request.method.as_str() {
        "initialize" => Ok(handle_initialize(state).await),
        "tools/list" => Ok(serde_json::json!({ "tools": state.server.list_tools() })),
        "tools/call" => handle_tools_call(state, &params).await,
        "resources/list" => Ok(serde_json::json!({
            "resources": state.server.list_resources().await
        })),
        "resources/templates/list" => Ok(serde_json::json!({
            "resourceTemplates": state.server.list_resource_templates().await
        })),
        "resources/read" => handle_resources_read(state, &params).await,
        "prompts/list" => Ok(serde_json::json!({
            "prompts": state.server.list_prompts().await
        })),
        "prompts/get" => handle_prompts_get(state, &params).await,
        other => {
            warn!("Unknown method: {}", other);
            return JsonRpcResponse::method_not_found(request.id);
        }
    };

    match outcome {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(error) => JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: None,
            error: Some(error),
        },
    }
}

impl AppState {
    async fn is_initialized(&self) -> bool {
        self.session
            .read()
            .await
            .as_ref()
            .is_some_and(|s| s.initialized)
    }
}

impl JsonRpcError {
    fn invalid_params(message: impl Into<String>) -> Self {
        Self {
            code: -32602,
            message: message.into(),
            data: None,
        }
    }

    fn resource_not_found(message: impl Into<String>) -> Self {
        Self {
            code: RESOURCE_NOT_FOUND,
            message: message.into(),
            data: None,
        }
    }
}

/// Pull a required string field out of the request params.
fn required_str<'a>(params: &'a serde_json::Value, key: &str) -> Result<&'a str, JsonRpcError> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| JsonRpcError::invalid_params(format!("Missing or non-string '{}'", key)))
}

/// Handle initialize request.
async fn handle_initialize(state: &AppState) -> serde_json::Value {
    info!("Processing initialize request");

    *state.session.write().await = Some(SessionState { initialized: true });

    serde_json::json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {},
            "resources": {},
            "prompts": {}
        },
        "serverInfo": {
            "name": state.server.name(),
            "version": state.server.version()
        },
        "instructions": SERVER_INSTRUCTIONS
    })
}

/// Handle tools/call request.
async fn handle_tools_call(
    state: &AppState,
    params: &serde_json::Value,
) -> Result<serde_json::Value, JsonRpcError> {
    let name = required_str(params, "name")?;
    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| serde_json::json!({}));

    state
        .server
        .call_tool(name, arguments)
        .await
        .map_err(JsonRpcError::invalid_params)
}

/// Handle resources/read request.
async fn handle_resources_read(
    state: &AppState,
    params: &serde_json::Value,
) -> Result<serde_json::Value, JsonRpcError> {
    let uri = required_str(params, "uri")?;

    state
        .server
        .read_resource(uri)
        .await
        .map_err(JsonRpcError::resource_not_found)
}

/// Handle prompts/get request.
async fn handle_prompts_get(
    state: &AppState,
    params: &serde_json::Value,
) -> Result<serde_json::Value, JsonRpcError> {
    let name = required_str(params, "name")?;

    state
        .server
        .get_prompt(name, params.get("arguments").cloned())
        .await
        .map_err(JsonRpcError::invalid_params)
}

/// Handle notifications (no response needed).
async fn handle_notification(state: &AppState, event: &str) {
    if event == "initialized" {
        info!("Client sent initialized notification");
        if let Some(session) = state.session.write().await.as_mut() {
            session.initialized = true;
        }
    } else {
        debug!("Ignoring notification: {}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;

    fn state() -> AppState {
        AppState {
            server: McpServer::new(Config::default()),
            session: Arc::new(RwLock::new(None)),
        }
    }

    fn request(method: &str, params: Option<serde_json::Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(serde_json::json!(1)),
            method: method.to_string(),
            params,
        }
    }

    #[tokio::test]
    async fn test_initialize_marks_session() {
        let state = state();
        let response = process_request(&state, request("initialize", None)).await;

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], "sas-prompt-server");
        assert!(state.session.read().await.as_ref().unwrap().initialized);
    }

    #[tokio::test]
    async fn test_prompts_get_fills_placeholder() {
        let params = serde_json::json!({
            "name": "sas_to_python_v2",
            "arguments": { "sas_code": "DATA b; SET a; RUN;" }
        });
        let response = process_request(&state(), request("prompts/get", Some(params))).await;

        let result = response.result.unwrap();
        let user = result["messages"][1]["content"]["text"].as_str().unwrap();
        assert!(user.contains("DATA b; SET a; RUN;"));
        assert!(!user.contains("[PASTE YOUR SAS CODE HERE]"));
    }

    #[tokio::test]
    async fn test_prompts_get_missing_name() {
        let response =
            process_request(&state(), request("prompts/get", Some(serde_json::json!({})))).await;
        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn test_resources_read_asset() {
        let params = serde_json::json!({ "uri": "prompt://sas-to-python/v1/system" });
        let response = process_request(&state(), request("resources/read", Some(params))).await;

        let result = response.result.unwrap();
        let text = result["contents"][0]["text"].as_str().unwrap();
        assert!(text.contains("preferably **lowercase**"));
    }

    #[tokio::test]
    async fn test_tools_call_check_request() {
        let params = serde_json::json!({
            "name": "check_translation_request",
            "arguments": { "text": "[PASTE YOUR SAS CODE HERE]" }
        });
        let response = process_request(&state(), request("tools/call", Some(params))).await;
        assert_eq!(response.result.unwrap()["isError"], true);
    }

    #[tokio::test]
    async fn test_resources_read_unknown_uri() {
        let params = serde_json::json!({ "uri": "prompt://sas-to-python/v9/user" });
        let response = process_request(&state(), request("resources/read", Some(params))).await;
        assert_eq!(response.error.unwrap().code, RESOURCE_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_initialized_notification() {
        let state = state();
        process_request(&state, request("initialize", None)).await;
        let response = process_request(&state, request("notifications/initialized", None)).await;
        assert!(response.error.is_none());
        assert!(state.is_initialized().await);
    }

    #[tokio::test]
    async fn test_wrong_jsonrpc_version() {
        let mut req = request("prompts/list", None);
        req.jsonrpc = "1.0".to_string();
        let response = process_request(&state(), req).await;
        assert_eq!(response.error.unwrap().code, -32600);
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let response = process_request(&state(), request("completion/complete", None)).await;
        assert_eq!(response.error.unwrap().code, -32601);
    }
}
