pub mod clock;
pub mod coverage;
pub mod error;
pub mod facility;
pub mod flow;
pub mod i18n;
pub mod identifier;
pub mod runner;
pub mod state;
pub mod step;
pub mod task;
pub mod tasks;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use coverage::{CoverageRecord, derive_coverage};
pub use error::{JourneyError, Result};
pub use facility::{FacilityRecord, facility_list, find_facility};
pub use flow::{Journey, JourneyBuilder, JourneyOutcome, NavigationRequest};
pub use i18n::Language;
pub use identifier::{IdentifierSource, RandomIdentifiers, SeededIdentifiers, is_well_formed};
pub use runner::{JourneyRunner, ToolResponse};
pub use state::{AdmissionWindow, InsuranceData, JourneyState, RoomCategory, ThirdPartyPayment};
pub use step::Step;
pub use task::{PassThroughTask, StepContext, StepTask};
