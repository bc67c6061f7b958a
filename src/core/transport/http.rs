//! HTTP transport implementation.
//!
//! JSON-RPC 2.0 over POST, for clients that cannot speak STDIO. Handles
//! `initialize`, `ping`, `tools/list`, `tools/call` and notifications.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::core::server::SERVER_INSTRUCTIONS;
use crate::domains::tools::ToolError;

/// Protocol version announced when the client does not request one.
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
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

    pub fn method_not_found(id: Option<Value>, method: &str) -> Self {
        Self::error(id, -32601, format!("Method not found: {}", method))
    }

    pub fn invalid_request(id: Option<Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    pub fn invalid_params(id: Option<Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }

    pub fn internal_error(id: Option<Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32603, msg)
    }
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    server: McpServer,
    rpc_path: String,
}

impl AppState {
    pub fn new(server: McpServer, rpc_path: impl Into<String>) -> Self {
        Self {
            server,
            rpc_path: rpc_path.into(),
        }
    }
}

impl HttpTransport {
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    fn router(&self, server: McpServer) -> Router {
        let state = AppState::new(server, self.config.rpc_path.clone());
        let app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(state);

        if self.config.enable_cors {
            app.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
        } else {
            app
        }
    }

    /// Serve until the listener fails.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "Ready - listening on {} (JSON-RPC over HTTP, CORS {})",
            addr,
            if self.config.enable_cors { "enabled" } else { "disabled" }
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))
    }
}

async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "tools": state.server.registry().len(),
        "endpoints": {
            "rpc": state.rpc_path,
            "health": "/health"
        },
        "protocol": "JSON-RPC 2.0"
    }))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    tracing::Span::current().record("method", request.method.as_str());
    debug!("Received JSON-RPC request: {}", request.method);

    let response = process_request(&state, request).await;
    (StatusCode::OK, Json(response))
}

/// Route one JSON-RPC request.
pub async fn process_request(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::invalid_request(request.id);
    }

    match request.method.as_str() {
        "initialize" => handle_initialize(state, request).await,
        "ping" => JsonRpcResponse::success(request.id, json!({})),
        "tools/list" => handle_tools_list(state, request),
        "tools/call" => handle_tools_call(state, request).await,
        method if method.starts_with("notifications/") => {
            handle_notification(&request);
            JsonRpcResponse::success(request.id, Value::Null)
        }
        method => {
            warn!("Unknown method: {}", method);
            JsonRpcResponse::method_not_found(request.id, method)
        }
    }
}

async fn handle_initialize(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let protocol_version = request
        .params
        .as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_PROTOCOL_VERSION)
        .to_string();
    info!("Initialize (protocol {})", protocol_version);

    JsonRpcResponse::success(
        request.id,
        json!({
            "protocolVersion": protocol_version,
            "capabilities": { "tools": {} },
            "serverInfo": {
                "name": state.server.name(),
                "version": state.server.version()
            },
            "instructions": SERVER_INSTRUCTIONS
        }),
    )
}

fn handle_tools_list(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    match serde_json::to_value(state.server.list_tools()) {
        Ok(tools) => JsonRpcResponse::success(request.id, json!({ "tools": tools })),
        Err(e) => JsonRpcResponse::internal_error(request.id, e.to_string()),
    }
}

async fn handle_tools_call(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let Some(params) = request.params else {
        return JsonRpcResponse::invalid_params(request.id, "Missing params");
    };
    let Some(name) = params.get("name").and_then(Value::as_str) else {
        return JsonRpcResponse::invalid_params(request.id, "Missing tool name");
    };
    let arguments = match params.get("arguments") {
        None | Some(Value::Null) => Default::default(),
        Some(Value::Object(map)) => map.clone(),
        Some(_) => {
            return JsonRpcResponse::invalid_params(request.id, "Tool arguments must be an object");
        }
    };

    match state.server.call_tool(name, arguments).await {
        Ok(result) => match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(request.id, value),
            Err(e) => JsonRpcResponse::internal_error(request.id, e.to_string()),
        },
        Err(e @ ToolError::UnknownTool(_)) => JsonRpcResponse::invalid_params(request.id, e.to_string()),
        Err(e) => JsonRpcResponse::internal_error(request.id, e.to_string()),
    }
}

fn handle_notification(request: &JsonRpcRequest) {
    match request.method.as_str() {
        "notifications/initialized" => info!("Client sent initialized notification"),
        other => debug!("Received notification: {}", other),
    }
}
