use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use super::{CallToolResult, Tool, ToolError, parse_arguments};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EchoArguments {
    message: String,
}

/// Returns its message unchanged.
pub struct EchoTool;

impl Tool for EchoTool {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn description(&self) -> &'static str {
        "Echo a message back to the caller"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "message": { "type": "string", "description": "Text to echo" }
            },
            "required": ["message"],
            "additionalProperties": false
        })
    }

    fn call(&self, arguments: &Value) -> Result<CallToolResult, ToolError> {
        let EchoArguments { message } = parse_arguments(arguments)?;
        debug!(length = message.len(), "echo");
        let data = json!({ "message": message });
        Ok(CallToolResult::structured(message, data))
    }
}
