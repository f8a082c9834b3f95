use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    clock::{Clock, SystemClock},
    facility::{FacilityRecord, facility_list},
    i18n::{self, Language, Text},
    identifier::{IdentifierSource, RandomIdentifiers},
    state::JourneyState,
    step::Step,
    task::{PassThroughTask, StepContext, StepTask},
    tasks::{AdmissionDetailsTask, ReviewTask, SelectHospitalTask},
};

/// Input to one journey call. Exists only for the duration of that call.
#[derive(Debug, Clone, Default)]
pub struct NavigationRequest {
    pub step: Step,
    pub language: Option<Language>,
    pub state: JourneyState,
    pub go_back: bool,
}

/// What the caller should display next.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyOutcome {
    pub step: Step,
    pub state: JourneyState,
    pub language: Language,
    pub facility_list: Vec<FacilityRecord>,
    #[serde(skip)]
    pub narrative: String,
}

/// The hospitalization journey: one task per step over a fixed linear order.
///
/// The engine keeps no state between calls; the caller carries
/// [`JourneyState`] from one call to the next. Concurrent calls for the same
/// logical journey are not ordered relative to each other.
pub struct Journey {
    tasks: HashMap<Step, Arc<dyn StepTask>>,
    clock: Arc<dyn Clock>,
    identifiers: Arc<dyn IdentifierSource>,
    default_language: Language,
}

impl Journey {
    fn task(&self, step: Step) -> Arc<dyn StepTask> {
        self.tasks
            .get(&step)
            .cloned()
            .unwrap_or_else(|| Arc::new(PassThroughTask(step)))
    }

    /// Execute one navigation request. Total over its input domain.
    ///
    /// Forward: the current step's task processes its form, the journey
    /// moves to the next step and that step's form is prepared.
    /// Back: the journey moves one step back (never before `start`) and only
    /// prepares that step's form; nothing is processed or regenerated.
    pub fn execute(&self, request: NavigationRequest) -> JourneyOutcome {
        let NavigationRequest {
            step,
            language,
            mut state,
            go_back,
        } = request;
        let language = language.unwrap_or(self.default_language);

        let mut ctx = StepContext {
            state: &mut state,
            language,
            today: self.clock.today(),
            identifiers: self.identifiers.as_ref(),
        };

        let next = if go_back {
            let target = step.previous();
            debug!(from = %step, to = %target, "navigating back");
            target
        } else {
            self.task(step).run(&mut ctx);
            step.next()
        };
        self.task(next).prepare(&mut ctx);

        info!(
            from = %step,
            to = %next,
            go_back,
            language = %language,
            "journey step executed"
        );

        JourneyOutcome {
            step: next,
            narrative: narrative(language, next, go_back, &state),
            state,
            language,
            facility_list: facility_list(),
        }
    }
}

fn narrative(language: Language, step: Step, go_back: bool, state: &JourneyState) -> String {
    let mut text = String::new();
    if go_back {
        text.push_str(i18n::text(language, Text::BackNavigation));
        text.push(' ');
    }
    text.push_str(i18n::step_message(language, step));
    if step == Step::Submitted {
        if let Some(id) = &state.declaration_id {
            text.push_str(&format!(
                " {}: {}.",
                i18n::text(language, Text::DeclarationReference),
                id
            ));
        }
    }
    text
}

/// Builder for [`Journey`].
pub struct JourneyBuilder {
    tasks: HashMap<Step, Arc<dyn StepTask>>,
    clock: Arc<dyn Clock>,
    identifiers: Arc<dyn IdentifierSource>,
    default_language: Language,
}

impl JourneyBuilder {
    /// Empty journey: every step passes through until a task is added.
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
            clock: Arc::new(SystemClock),
            identifiers: Arc::new(RandomIdentifiers),
            default_language: Language::FALLBACK,
        }
    }

    pub fn hospitalization() -> Self {
        Self::new()
            .add_task(Arc::new(SelectHospitalTask))
            .add_task(Arc::new(AdmissionDetailsTask))
            .add_task(Arc::new(ReviewTask))
    }

    /// Register `task` for its step, replacing any earlier task for that step.
    pub fn add_task(mut self, task: Arc<dyn StepTask>) -> Self {
        self.tasks.insert(task.step(), task);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_identifier_source(mut self, identifiers: Arc<dyn IdentifierSource>) -> Self {
        self.identifiers = identifiers;
        self
    }

    pub fn default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    pub fn build(self) -> Journey {
        Journey {
            tasks: self.tasks,
            clock: self.clock,
            identifiers: self.identifiers,
            default_language: self.default_language,
        }
    }
}

impl Default for JourneyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
