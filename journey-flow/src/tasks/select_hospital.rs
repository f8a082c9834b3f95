use tracing::{debug, info};

use crate::{
    facility::{CUSTOM_FACILITY_ID, find_facility},
    step::Step,
    task::{StepContext, StepTask},
};

/// Resolves the chosen hospital's name and city from the facility catalog.
///
/// The custom marker and ids missing from the catalog keep whatever name
/// and city the caller typed in.
pub struct SelectHospitalTask;

impl StepTask for SelectHospitalTask {
    fn step(&self) -> Step {
        Step::SelectHospital
    }

    fn run(&self, ctx: &mut StepContext<'_>) {
        let Some(facility_id) = ctx.state.facility_id.clone() else {
            debug!(step = %self.step(), "no facility selected");
            return;
        };

        match find_facility(&facility_id) {
            Some(facility) => {
                info!(
                    step = %self.step(),
                    facility_id = %facility.id,
                    city = %facility.city,
                    "facility resolved from catalog"
                );
                ctx.state.facility_name = Some(facility.name);
                ctx.state.facility_city = Some(facility.city);
            }
            None if facility_id == CUSTOM_FACILITY_ID => {
                debug!(step = %self.step(), "custom facility entry kept as typed");
            }
            None => {
                debug!(
                    step = %self.step(),
                    facility_id = %facility_id,
                    "facility id not in catalog, keeping caller fields"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{i18n::Language, identifier::SeededIdentifiers, state::JourneyState};
    use chrono::NaiveDate;

    fn run_with(state: &mut JourneyState) {
        let identifiers = SeededIdentifiers::new(1);
        let mut ctx = StepContext {
            state,
            language: Language::En,
            today: NaiveDate::from_ymd_opt(2026, 5, 4).unwrap(),
            identifiers: &identifiers,
        };
        SelectHospitalTask.run(&mut ctx);
    }

    #[test]
    fn catalog_id_overwrites_name_and_city() {
        let mut state = JourneyState {
            facility_id: Some("uz-gent".to_string()),
            facility_name: Some("stale".to_string()),
            ..Default::default()
        };
        run_with(&mut state);
        assert_eq!(state.facility_name.as_deref(), Some("UZ Gent"));
        assert_eq!(state.facility_city.as_deref(), Some("Gent"));
    }

    #[test]
    fn custom_entry_keeps_typed_fields() {
        let mut state = JourneyState {
            facility_id: Some(CUSTOM_FACILITY_ID.to_string()),
            facility_name: Some("Kliniek Sint-Anna".to_string()),
            facility_city: Some("Hasselt".to_string()),
            ..Default::default()
        };
        let before = state.clone();
        run_with(&mut state);
        assert_eq!(state, before);
    }

    #[test]
    fn unknown_id_keeps_typed_fields() {
        let mut state = JourneyState {
            facility_id: Some("nowhere".to_string()),
            facility_name: Some("Kliniek Sint-Anna".to_string()),
            facility_city: Some("Hasselt".to_string()),
            ..Default::default()
        };
        let before = state.clone();
        run_with(&mut state);
        assert_eq!(state, before);
    }

    #[test]
    fn nothing_selected_is_a_no_op() {
        let mut state = JourneyState::default();
        run_with(&mut state);
        assert_eq!(state, JourneyState::default());
    }
}
