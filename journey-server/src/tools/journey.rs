use std::sync::Arc;

use journey_flow::{Journey, JourneyRunner, Step};
use serde_json::{Value, json};
use tracing::info;

use super::{CallToolResult, Tool, ToolError};

/// Template the host renders the journey result with.
pub const WIDGET_TEMPLATE_URI: &str = "ui://widget/hospitalization-journey.html";

/// Step-by-step hospitalization declaration.
pub struct JourneyTool {
    runner: JourneyRunner,
}

impl JourneyTool {
    pub fn new(journey: Arc<Journey>) -> Self {
        Self {
            runner: JourneyRunner::new(journey),
        }
    }
}

impl Tool for JourneyTool {
    fn name(&self) -> &'static str {
        "hospitalization_journey"
    }

    fn description(&self) -> &'static str {
        "Guide a member through declaring a hospital admission, one step per call. \
         Send back the full `state` returned by the previous call."
    }

    fn input_schema(&self) -> Value {
        let steps: Vec<&str> = Step::ALL.iter().map(|s| s.as_str()).collect();
        json!({
            "type": "object",
            "properties": {
                "step": {
                    "type": "string",
                    "enum": steps,
                    "default": Step::default().as_str(),
                    "description": "Step whose form is being submitted"
                },
                "language": {
                    "type": "string",
                    "enum": ["en", "fr", "nl"],
                    "description": "Locale of the narrative; unsupported values fall back to the default"
                },
                "state": {
                    "type": "object",
                    "description": "Journey state returned by the previous call"
                },
                "goBack": {
                    "type": "boolean",
                    "default": false,
                    "description": "Return to the previous step instead of submitting"
                }
            }
        })
    }

    fn meta(&self) -> Option<Value> {
        Some(json!({
            "openai/outputTemplate": WIDGET_TEMPLATE_URI,
            "openai/widgetAccessible": true,
            "openai/toolInvocation/invoking": "Preparing the next step",
            "openai/toolInvocation/invoked": "Step ready"
        }))
    }

    fn call(&self, arguments: &Value) -> Result<CallToolResult, ToolError> {
        let response = self.runner.run(arguments)?;
        info!(
            step = %response.structured_content.step,
            language = %response.structured_content.language,
            "journey tool call completed"
        );
        let data = serde_json::to_value(&response.structured_content)
            .map_err(journey_flow::JourneyError::from)?;
        Ok(CallToolResult::structured(response.narrative, data))
    }
}
