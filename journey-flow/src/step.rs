//! Step catalog: the fixed, linear order of the hospitalization journey.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::JourneyError;

/// One named stage of the journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    Start,
    SelectMember,
    SelectHospital,
    AdmissionDetails,
    RoomType,
    Review,
    Submitted,
}

impl Step {
    /// Every step, in journey order.
    pub const ALL: [Step; 7] = [
        Step::Start,
        Step::SelectMember,
        Step::SelectHospital,
        Step::AdmissionDetails,
        Step::RoomType,
        Step::Review,
        Step::Submitted,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Step at `index`, clamped into the catalog.
    pub fn at(index: usize) -> Step {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    /// The step immediately following this one. The terminal step maps to itself.
    pub fn next(self) -> Step {
        Self::at(self.index() + 1)
    }

    /// The step immediately preceding this one. The first step maps to itself.
    pub fn previous(self) -> Step {
        Self::at(self.index().saturating_sub(1))
    }

    pub fn is_first(self) -> bool {
        self == Step::Start
    }

    pub fn is_terminal(self) -> bool {
        self == Step::Submitted
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Step::Start => "start",
            Step::SelectMember => "select_member",
            Step::SelectHospital => "select_hospital",
            Step::AdmissionDetails => "admission_details",
            Step::RoomType => "room_type",
            Step::Review => "review",
            Step::Submitted => "submitted",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Step {
    type Err = JourneyError;

    /// Identifiers outside the catalog are rejected rather than mapped to `start`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| JourneyError::UnknownStep(s.to_string()))
    }
}
