use tracing::info;

use crate::{
    coverage::derive_coverage,
    step::Step,
    task::{StepContext, StepTask},
};

/// Submits the reviewed declaration: draws a declaration id and attaches
/// the derived insurance record.
///
/// Both are produced again on every forward call into this step, so a
/// repeated submission carries a fresh id.
pub struct ReviewTask;

impl StepTask for ReviewTask {
    fn step(&self) -> Step {
        Step::Review
    }

    fn run(&self, ctx: &mut StepContext<'_>) {
        let declaration_id = ctx.identifiers.next_identifier();
        let coverage = derive_coverage(ctx.state, ctx.language);

        info!(
            step = %self.step(),
            declaration_id = %declaration_id,
            coverage_percentage = coverage.third_party_payment.coverage_percentage,
            prior_auth_required = coverage.prior_auth_required,
            "declaration submitted"
        );

        ctx.state.declaration_id = Some(declaration_id.clone());
        ctx.state.insurance_data = Some(coverage.into_insurance_data(declaration_id));
    }
}
