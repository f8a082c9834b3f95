//! Coverage derivation for a reviewed declaration.

use crate::i18n::{self, Language, Text};
use crate::state::{InsuranceData, JourneyState, ThirdPartyPayment};

pub const FULL_COVERAGE: u8 = 100;
pub const REDUCED_COVERAGE: u8 = 75;

/// Reason keywords that put an admission under prior authorization.
pub const PRIOR_AUTH_KEYWORDS: &[&str] = &[
    "surgery",
    "surgical",
    "operation",
    "childbirth",
    "delivery",
    "caesarean",
    "cesarean",
    "maternity",
    "chirurgie",
    "opération",
    "accouchement",
    "operatie",
    "bevalling",
    "ingreep",
];

pub const BASE_SERVICES: &[&str] = &["hospital_stay", "medical_fees", "pharmacy"];
pub const ACCIDENT_SERVICE: &str = "emergency_transport";
pub const SAME_DAY_SERVICE: &str = "same_day_procedure";

/// Coverage computed from the accumulated state. Deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageRecord {
    pub third_party_payment: ThirdPartyPayment,
    pub prior_auth_required: bool,
    pub covered_services: Vec<String>,
    pub notes: Vec<String>,
}

impl CoverageRecord {
    pub fn into_insurance_data(self, member_reference: String) -> InsuranceData {
        InsuranceData {
            member_reference,
            third_party_payment: self.third_party_payment,
            prior_auth_required: self.prior_auth_required,
            covered_services: self.covered_services,
            notes: self.notes,
        }
    }
}

pub fn requires_prior_authorization(reason: &str) -> bool {
    let reason = reason.to_lowercase();
    PRIOR_AUTH_KEYWORDS
        .iter()
        .any(|keyword| reason.contains(keyword))
}

pub fn derive_coverage(state: &JourneyState, language: Language) -> CoverageRecord {
    let reduced = state.room_category.is_some_and(|c| c.is_reduced_tier());
    let same_day = state.room_category.is_some_and(|c| c.is_same_day());
    let accident = state.is_accident();
    let prior_auth_required = state
        .reason
        .as_deref()
        .is_some_and(requires_prior_authorization);

    let third_party_payment = if reduced {
        ThirdPartyPayment {
            applicable: true,
            coverage_percentage: REDUCED_COVERAGE,
            copay_estimate: i18n::text(language, Text::CopayReducedTier).to_string(),
        }
    } else {
        ThirdPartyPayment {
            applicable: true,
            coverage_percentage: FULL_COVERAGE,
            copay_estimate: i18n::text(language, Text::CopayNone).to_string(),
        }
    };

    let mut covered_services: Vec<String> = BASE_SERVICES.iter().map(|s| s.to_string()).collect();
    if accident {
        covered_services.push(ACCIDENT_SERVICE.to_string());
    }
    if same_day {
        covered_services.push(SAME_DAY_SERVICE.to_string());
    }

    let mut notes = Vec::new();
    if prior_auth_required {
        notes.push(i18n::text(language, Text::NotePriorAuthorization).to_string());
    }
    if accident {
        notes.push(i18n::text(language, Text::NoteAccident).to_string());
    }
    if reduced {
        notes.push(i18n::text(language, Text::NoteReducedTier).to_string());
    }

    CoverageRecord {
        third_party_payment,
        prior_auth_required,
        covered_services,
        notes,
    }
}
