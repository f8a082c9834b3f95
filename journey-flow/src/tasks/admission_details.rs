use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::{
    state::AdmissionWindow,
    step::Step,
    task::{StepContext, StepTask},
};

/// How far back an admission may still be declared.
pub const LOOKBACK_DAYS: u64 = 30;
/// How far ahead a planned admission may be declared.
pub const LOOKAHEAD_DAYS: u64 = 180;

pub fn admission_window(today: NaiveDate) -> AdmissionWindow {
    AdmissionWindow {
        default_date: today,
        min_date: today.checked_sub_days(Days::new(LOOKBACK_DAYS)).unwrap_or(today),
        max_date: today.checked_add_days(Days::new(LOOKAHEAD_DAYS)).unwrap_or(today),
    }
}

/// Offers date bounds for the admission form. The submitted date, reason
/// and accident flag are taken as supplied.
pub struct AdmissionDetailsTask;

impl StepTask for AdmissionDetailsTask {
    fn step(&self) -> Step {
        Step::AdmissionDetails
    }

    fn run(&self, _ctx: &mut StepContext<'_>) {}

    fn prepare(&self, ctx: &mut StepContext<'_>) {
        let window = admission_window(ctx.today);
        debug!(
            step = %self.step(),
            min_date = %window.min_date,
            max_date = %window.max_date,
            "admission window computed"
        );
        ctx.state.admission_window = Some(window);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_spans_lookback_and_lookahead() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let window = admission_window(today);
        assert_eq!(window.default_date, today);
        assert_eq!(window.min_date, NaiveDate::from_ymd_opt(2026, 2, 13).unwrap());
        assert_eq!(window.max_date, NaiveDate::from_ymd_opt(2026, 9, 11).unwrap());
        assert!(window.contains(today));
    }
}
