//! JSON-RPC 2.0 models and method dispatch for the tool protocol.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::tools::{CallToolResult, ToolRegistry};

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "hospitalization-journey";

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
    /// Absent for notifications; an explicit `null` is still a request.
    #[serde(default, deserialize_with = "present")]
    pub id: Option<Value>,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

/// Handle one request. Notifications produce no response.
pub fn dispatch(tools: &ToolRegistry, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
    let Some(id) = request.id else {
        info!(method = %request.method, "notification received");
        return None;
    };

    if request.jsonrpc.as_deref().is_some_and(|v| v != "2.0") {
        return Some(JsonRpcResponse::failure(
            id,
            INVALID_REQUEST,
            "jsonrpc must be \"2.0\"",
        ));
    }

    let response = match request.method.as_str() {
        "initialize" => JsonRpcResponse::success(id, initialize_result()),
        "ping" => JsonRpcResponse::success(id, json!({})),
        "tools/list" => JsonRpcResponse::success(id, json!({ "tools": tools.descriptors() })),
        "tools/call" => call_tool(tools, id, request.params),
        other => {
            warn!(method = %other, "unknown method");
            JsonRpcResponse::failure(id, METHOD_NOT_FOUND, format!("Method not found: {other}"))
        }
    };
    Some(response)
}

fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": { "tools": { "listChanged": false } },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

fn call_tool(tools: &ToolRegistry, id: Value, params: Option<Value>) -> JsonRpcResponse {
    let params: CallToolParams = match params.map(serde_json::from_value) {
        Some(Ok(params)) => params,
        Some(Err(e)) => {
            return JsonRpcResponse::failure(id, INVALID_PARAMS, format!("Invalid params: {e}"));
        }
        None => return JsonRpcResponse::failure(id, INVALID_PARAMS, "Missing params"),
    };

    let Some(tool) = tools.get(&params.name) else {
        warn!(tool = %params.name, "unknown tool");
        return JsonRpcResponse::failure(
            id,
            INVALID_PARAMS,
            format!("Unknown tool: {}", params.name),
        );
    };

    let mut result = match tool.call(&params.arguments) {
        Ok(result) => result,
        Err(e) => {
            warn!(tool = %params.name, error = %e, "tool call failed");
            CallToolResult::error(&e)
        }
    };
    result.meta = tool.meta();

    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::failure(id, INTERNAL_ERROR, e.to_string()),
    }
}
