//! Tools exposed over `tools/list` and `tools/call`.

pub mod calculator;
pub mod echo;
pub mod journey;

use std::sync::Arc;

use journey_flow::JourneyError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

pub use calculator::CalculatorTool;
pub use echo::EchoTool;
pub use journey::JourneyTool;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error(transparent)]
    Journey(#[from] JourneyError),
}

#[derive(Debug, Clone, Serialize)]
pub struct TextContent {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

impl TextContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            kind: "text",
            text: text.into(),
        }
    }
}

/// Result of `tools/call`: a transcript line plus optional widget data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToolResult {
    pub content: Vec<TextContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_content: Option<Value>,
    pub is_error: bool,
    #[serde(rename = "_meta", skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl CallToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![TextContent::new(text)],
            structured_content: None,
            is_error: false,
            meta: None,
        }
    }

    pub fn structured(text: impl Into<String>, data: Value) -> Self {
        Self {
            structured_content: Some(data),
            ..Self::text(text)
        }
    }

    /// Failure reported inside a successful JSON-RPC response, so the host
    /// model can read it and retry.
    pub fn error(err: &ToolError) -> Self {
        Self {
            is_error: true,
            ..Self::text(err.to_string())
        }
    }
}

pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// JSON schema of the `arguments` object.
    fn input_schema(&self) -> Value;

    /// Widget metadata advertised in `tools/list`.
    fn meta(&self) -> Option<Value> {
        None
    }

    fn call(&self, arguments: &Value) -> Result<CallToolResult, ToolError>;

    fn descriptor(&self) -> Value {
        let mut descriptor = json!({
            "name": self.name(),
            "description": self.description(),
            "inputSchema": self.input_schema(),
        });
        if let Some(meta) = self.meta() {
            descriptor["_meta"] = meta;
        }
        descriptor
    }
}

/// Tools in registration order.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.retain(|existing| existing.name() != tool.name());
        self.tools.push(tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|tool| tool.name() == name).cloned()
    }

    pub fn descriptors(&self) -> Vec<Value> {
        self.tools.iter().map(|tool| tool.descriptor()).collect()
    }
}

/// Deserialize a tool's `arguments` object into its typed form.
pub(crate) fn parse_arguments<T: DeserializeOwned>(arguments: &Value) -> Result<T, ToolError> {
    T::deserialize(arguments).map_err(|e| ToolError::InvalidArguments(e.to_string()))
}
