//! JourneyRunner – boundary in front of the [`Journey`] engine.
//!
//! Tool calls arrive as loosely typed JSON. The runner parses the
//! `{ step?, language?, state?, goBack? }` argument object, fills defaults
//! explicitly, rejects what the engine must never see (unknown steps,
//! mistyped state fields), executes exactly one journey step and shapes the
//! result into the envelope the widget renders.
//!
//! Defaults:
//! - `step` missing or `null`: `start`
//! - `language` missing or unsupported: the journey's default language
//! - `state` missing or `null`: empty state
//! - `goBack` missing or `null`: `false`

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{
    error::{JourneyError, Result},
    flow::{Journey, JourneyOutcome, NavigationRequest},
    i18n::Language,
    state::JourneyState,
    step::Step,
};

/// Result envelope of one journey tool call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponse {
    /// Human-facing transcript line
    pub narrative: String,
    /// Data the widget renders
    pub structured_content: JourneyOutcome,
}

#[derive(Clone)]
pub struct JourneyRunner {
    journey: Arc<Journey>,
}

impl JourneyRunner {
    pub fn new(journey: Arc<Journey>) -> Self {
        Self { journey }
    }

    /// Validate `arguments` and execute one journey step.
    pub fn run(&self, arguments: &Value) -> Result<ToolResponse> {
        let request = self.parse(arguments)?;
        let outcome = self.journey.execute(request);
        Ok(ToolResponse {
            narrative: outcome.narrative.clone(),
            structured_content: outcome,
        })
    }

    pub fn parse(&self, arguments: &Value) -> Result<NavigationRequest> {
        let args = match arguments {
            Value::Null => JourneyArguments::default(),
            other => JourneyArguments::deserialize(other)
                .map_err(|e| JourneyError::InvalidArguments(e.to_string()))?,
        };

        let step = match args.step {
            Some(name) => name.parse()?,
            None => Step::default(),
        };

        let language = args.language.and_then(|code| {
            let language = Language::from_code(&code);
            if language.is_none() {
                warn!(language = %code, "unsupported language, using default");
            }
            language
        });

        let state = match args.state {
            Some(fields) => {
                serde_json::from_value(Value::Object(fields)).map_err(JourneyError::InvalidState)?
            }
            None => JourneyState::default(),
        };

        let go_back = args.go_back.unwrap_or(false);

        debug!(step = %step, go_back, "journey arguments accepted");

        Ok(NavigationRequest {
            step,
            language,
            state,
            go_back,
        })
    }
}

/// Raw tool arguments; `null` members count as missing.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct JourneyArguments {
    step: Option<String>,
    language: Option<String>,
    state: Option<Map<String, Value>>,
    go_back: Option<bool>,
}
