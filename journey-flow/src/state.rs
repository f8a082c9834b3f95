use chrono::NaiveDate;
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Form state accumulated across journey calls.
///
/// The caller owns this record and sends it back in full on every call.
/// Every field is optional until the step that owns it has been filled in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_city: Option<String>,

    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub admission_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accident: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admission_window: Option<AdmissionWindow>,

    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub room_category: Option<RoomCategory>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaration_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_data: Option<InsuranceData>,

    /// Widget-owned keys the engine does not interpret; carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Form inputs left empty come back as `""`; treat them as not filled in.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => {
            T::deserialize(IntoDeserializer::<D::Error>::into_deserializer(raw)).map(Some)
        }
    }
}

impl JourneyState {
    pub fn is_accident(&self) -> bool {
        self.accident.unwrap_or(false)
    }
}

/// Room category chosen at the `room_type` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomCategory {
    /// Shared or double room.
    #[serde(alias = "shared", alias = "double")]
    Standard,
    /// Single room; reimbursed at the reduced tier.
    #[serde(alias = "single", alias = "private")]
    Reduced,
    /// Same-day admission without an overnight stay.
    #[serde(alias = "day_hospital")]
    DayCase,
}

impl RoomCategory {
    pub fn is_reduced_tier(self) -> bool {
        self == RoomCategory::Reduced
    }

    pub fn is_same_day(self) -> bool {
        self == RoomCategory::DayCase
    }
}

/// Date bounds offered by the admission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionWindow {
    pub default_date: NaiveDate,
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

impl AdmissionWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min_date <= date && date <= self.max_date
    }
}

/// Insurance record derived when the declaration is reviewed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceData {
    pub member_reference: String,
    pub third_party_payment: ThirdPartyPayment,
    pub prior_auth_required: bool,
    pub covered_services: Vec<String>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThirdPartyPayment {
    pub applicable: bool,
    pub coverage_percentage: u8,
    pub copay_estimate: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_is_an_empty_state() {
        let state: JourneyState = serde_json::from_value(json!({})).unwrap();
        assert_eq!(state, JourneyState::default());
        assert_eq!(serde_json::to_value(&state).unwrap(), json!({}));
    }

    #[test]
    fn unknown_keys_round_trip() {
        let input = json!({
            "memberName": "Anna Peeters",
            "uiTheme": "dark",
            "draft": { "touched": true }
        });
        let state: JourneyState = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(state.member_name.as_deref(), Some("Anna Peeters"));
        assert_eq!(state.extra.get("uiTheme"), Some(&json!("dark")));
        assert_eq!(serde_json::to_value(&state).unwrap(), input);
    }

    #[test]
    fn room_category_accepts_aliases() {
        let state: JourneyState =
            serde_json::from_value(json!({ "roomCategory": "single" })).unwrap();
        assert_eq!(state.room_category, Some(RoomCategory::Reduced));
        let state: JourneyState =
            serde_json::from_value(json!({ "roomCategory": "day_hospital" })).unwrap();
        assert_eq!(state.room_category, Some(RoomCategory::DayCase));
    }

    #[test]
    fn mistyped_fields_are_rejected() {
        assert!(serde_json::from_value::<JourneyState>(json!({ "accident": "yes" })).is_err());
        assert!(
            serde_json::from_value::<JourneyState>(json!({ "admissionDate": "tomorrow" }))
                .is_err()
        );
        assert!(
            serde_json::from_value::<JourneyState>(json!({ "roomCategory": "suite" })).is_err()
        );
        assert!(
            serde_json::from_value::<JourneyState>(json!({ "admissionDate": 20260402 })).is_err()
        );
    }

    #[test]
    fn blank_inputs_are_not_filled_in() {
        let state: JourneyState = serde_json::from_value(json!({
            "admissionDate": "",
            "roomCategory": "  ",
            "reason": "checkup"
        }))
        .unwrap();
        assert_eq!(state.admission_date, None);
        assert_eq!(state.room_category, None);
        assert_eq!(state.reason.as_deref(), Some("checkup"));

        let state: JourneyState =
            serde_json::from_value(json!({ "admissionDate": "2026-04-02" })).unwrap();
        assert_eq!(state.admission_date, NaiveDate::from_ymd_opt(2026, 4, 2));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let window = AdmissionWindow {
            default_date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            min_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            max_date: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
        };
        assert!(window.contains(window.min_date));
        assert!(window.contains(window.max_date));
        assert!(!window.contains(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()));
    }
}
