//! JSON-RPC message types and method dispatch

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, info};
use unitconv_units::Converter;
use crate::config::ServerConfig;
use crate::tools;

pub const PROTOCOL_VERSION: &str = "2025-11-25";
pub const SERVER_NAME: &str = "unitconv";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

#[derive(Debug, Deserialize)]
pub struct McpRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

#[derive(Debug, Serialize)]
pub struct McpError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl McpError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        McpError { code, message: message.into(), data: None }
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        McpError::new(INVALID_PARAMS, message)
    }

    pub fn with_data(mut self, data: JsonValue) -> Self {
        self.data = Some(data);
        self
    }
}

impl McpResponse {
    pub fn success(id: Option<JsonValue>, result: JsonValue) -> Self {
        McpResponse { jsonrpc: "2.0".to_string(), id, result: Some(result), error: None }
    }

    pub fn failure(id: Option<JsonValue>, error: McpError) -> Self {
        McpResponse { jsonrpc: "2.0".to_string(), id, result: None, error: Some(error) }
    }

    /// Response for a line that was not valid JSON
    pub fn parse_error(details: impl std::fmt::Display) -> Self {
        McpResponse::failure(None, McpError::new(PARSE_ERROR, format!("Parse error: {}", details)))
    }

    /// Response for valid JSON that is not a request object
    pub fn invalid_request(id: Option<JsonValue>, details: impl std::fmt::Display) -> Self {
        McpResponse::failure(id, McpError::new(INVALID_REQUEST, format!("Invalid Request: {}", details)))
    }
}

/// Everything a request handler needs; built once at startup
#[derive(Debug, Clone)]
pub struct Server {
    pub converter: Converter<'static>,
    pub config: ServerConfig,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Server { converter: Converter::default(), config }
    }

    pub fn handle_request(&self, request: &McpRequest) -> McpResponse {
        debug!(method = %request.method, "dispatching");

        let result = match request.method.as_str() {
            // Lifecycle
            "initialize" => handle_initialize(&request.params),
            "initialized" | "notifications/initialized" => Ok(json!({})),
            "ping" => Ok(json!({})),

            // Tools
            "tools/list" => Ok(tools::list()),
            "tools/call" => tools::call(self, &request.params),

            _ => Err(McpError::new(
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            )),
        };

        match result {
            Ok(r) => McpResponse::success(request.id.clone(), r),
            Err(e) => McpResponse::failure(request.id.clone(), e),
        }
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Echo the client's protocol version for compatibility
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Unit conversion across length, weight, time, temperature, speed, energy and volume"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Use list_categories and list_units to discover unit names, then convert. Temperature uses a scale factor only (100 C converts to 180 F)."
    }))
}
