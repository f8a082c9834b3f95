use chrono::NaiveDate;

use crate::{i18n::Language, identifier::IdentifierSource, state::JourneyState, step::Step};

/// Everything a step task may read or write during one call.
pub struct StepContext<'a> {
    pub state: &'a mut JourneyState,
    pub language: Language,
    pub today: NaiveDate,
    pub identifiers: &'a dyn IdentifierSource,
}

/// Behaviour attached to one step of the journey.
pub trait StepTask: Send + Sync {
    /// The step this task handles
    fn step(&self) -> Step;

    /// Process the form submitted at this step.
    fn run(&self, ctx: &mut StepContext<'_>);

    /// Prepare the form of this step before it is displayed.
    fn prepare(&self, _ctx: &mut StepContext<'_>) {}
}

/// Task for steps that only collect caller-supplied fields.
#[derive(Debug, Clone, Copy)]
pub struct PassThroughTask(pub Step);

impl StepTask for PassThroughTask {
    fn step(&self) -> Step {
        self.0
    }

    fn run(&self, _ctx: &mut StepContext<'_>) {}
}
