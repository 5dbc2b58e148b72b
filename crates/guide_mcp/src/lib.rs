//! MCP (Model Context Protocol) server implementation
//!
//! JSON-RPC 2.0 over line-delimited stdio, exposing a single tool that reads
//! the guidelines document, optionally narrowed to one section.
//!
//! CRITICAL: stdout is reserved EXCLUSIVELY for JSON-RPC responses.
//! All logs (Info/Warn/Error) MUST go to stderr to avoid protocol corruption.

use guide_common::{GuideError, Result};
use guide_config::{Config, ServerConfig};
use guide_core::{DocumentSource, GuidelinesService, HttpSource};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const JSONRPC_VERSION: &str = "2.0";

/// Protocol revision offered when the client does not name one
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC request
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

/// JSON-RPC response
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Option<Value>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// JSON-RPC error object
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Convert GuideError to JSON-RPC error
    pub fn from_guide_error(err: &GuideError) -> Self {
        let code = match err {
            GuideError::ValidationError(_) | GuideError::JsonError(_) => Self::INVALID_PARAMS,
            _ => Self::INTERNAL_ERROR,
        };

        let data = match err {
            GuideError::ValidationError(_) => None,
            _ => Some(json!({ "kind": err.kind() })),
        };

        Self {
            code,
            message: err.to_string(),
            data,
        }
    }

    pub fn parse_error(detail: impl std::fmt::Display) -> Self {
        Self::new(Self::PARSE_ERROR, format!("Parse error: {}", detail))
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::new(Self::METHOD_NOT_FOUND, format!("Method not found: {}", method))
    }
}

/// Tool result payload in MCP shape
pub fn tool_result(text: impl Into<String>, is_error: bool) -> Value {
    json!({
        "content": [{ "type": "text", "text": text.into() }],
        "isError": is_error
    })
}

/// MCP server bound to one guidelines service
pub struct McpServer<S> {
    service: GuidelinesService<S>,
    settings: ServerConfig,
}

impl McpServer<HttpSource> {
    pub fn from_config(config: &Config) -> Result<Self> {
        let service = GuidelinesService::from_config(config)?;
        Ok(Self::new(service, config.server.clone()))
    }
}

impl<S: DocumentSource> McpServer<S> {
    pub fn new(service: GuidelinesService<S>, settings: ServerConfig) -> Self {
        Self { service, settings }
    }

    pub fn tool_name(&self) -> &str {
        &self.settings.tool_name
    }

    /// Handle one raw stdin line; `None` means nothing is written back
    pub async fn handle_line(&self, line: &str) -> Option<String> {
        let response = match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(request) => self.handle_request(request).await?,
            Err(e) => {
                tracing::error!("Failed to parse request: {}", e);
                JsonRpcResponse::failure(None, JsonRpcError::parse_error(e))
            }
        };

        match serde_json::to_string(&response) {
            Ok(json) => Some(json),
            Err(e) => {
                tracing::error!("Failed to serialize response: {}", e);
                None
            }
        }
    }

    /// Handle a single JSON-RPC request
    ///
    /// Requests without an id are notifications and get no response.
    #[tracing::instrument(skip_all, fields(method = %request.method))]
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        // Log to stderr only
        tracing::info!(target: "mcp", "Handling MCP request");

        let Some(id) = request.id else {
            tracing::debug!("Notification, no response");
            return None;
        };

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::failure(
                Some(id),
                JsonRpcError::new(
                    JsonRpcError::INVALID_REQUEST,
                    format!("Unsupported jsonrpc version: '{}'", request.jsonrpc),
                ),
            ));
        }

        let result = match request.method.as_str() {
            "initialize" => Ok(self.handle_initialize(request.params.as_ref())),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(self.handle_tools_list()),
            "tools/call" => self.handle_tools_call(request.params).await,
            method => {
                tracing::warn!(method, "Unknown method");
                return Some(JsonRpcResponse::failure(
                    Some(id),
                    JsonRpcError::method_not_found(method),
                ));
            }
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(Some(id), value),
            Err(e) => JsonRpcResponse::failure(Some(id), JsonRpcError::from_guide_error(&e)),
        })
    }

    fn handle_initialize(&self, params: Option<&Value>) -> Value {
        let protocol_version = params
            .and_then(|p| p.get("protocolVersion"))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_PROTOCOL_VERSION);

        json!({
            "protocolVersion": protocol_version,
            "capabilities": { "tools": {} },
            "serverInfo": {
                "name": self.settings.name,
                "version": env!("CARGO_PKG_VERSION")
            }
        })
    }

    fn handle_tools_list(&self) -> Value {
        json!({
            "tools": [{
                "name": self.settings.tool_name,
                "description": "Reads the Swift API Design Guidelines from swift.org as plain text",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "section": {
                            "type": "string",
                            "description": "Section name to narrow the result to (e.g. \"Naming\", \"Clarity\"). The whole document is returned when omitted."
                        }
                    }
                }
            }]
        })
    }

    async fn handle_tools_call(&self, params: Option<Value>) -> Result<Value> {
        #[derive(Deserialize)]
        struct CallParams {
            name: String,
            #[serde(default)]
            arguments: Option<Value>,
        }

        let params: CallParams = params
            .ok_or_else(|| GuideError::ValidationError("Missing params".to_string()))
            .and_then(|v| {
                serde_json::from_value(v)
                    .map_err(|e| GuideError::ValidationError(format!("Invalid params: {}", e)))
            })?;

        if params.name != self.settings.tool_name {
            tracing::warn!(tool = %params.name, "Unknown tool");
            return Ok(tool_result(format!("Tool not found: {}", params.name), true));
        }

        let section = section_argument(params.arguments.as_ref());
        match self.service.read(section).await {
            Ok(text) => Ok(tool_result(text, false)),
            Err(e) => {
                tracing::warn!(
                    kind = e.kind(),
                    fetch = e.is_fetch_failure(),
                    error = %e,
                    "Guideline retrieval failed"
                );
                Ok(tool_result(format!("Error: {}", e), true))
            }
        }
    }
}

/// The `section` argument; anything but a string counts as absent
fn section_argument(arguments: Option<&Value>) -> Option<&str> {
    let value = arguments?.get("section")?;
    match value.as_str() {
        Some(section) => Some(section),
        None => {
            if !value.is_null() {
                tracing::warn!(section = %value, "Ignoring non-string section argument");
            }
            None
        }
    }
}
