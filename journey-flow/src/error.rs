use thiserror::Error;

/// Errors raised at the boundary in front of the journey engine.
///
/// The engine itself is total; everything here is about rejecting
/// arguments before a step is ever executed.
#[derive(Error, Debug)]
pub enum JourneyError {
    #[error("Unknown step: {0}")]
    UnknownStep(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Invalid journey state: {0}")]
    InvalidState(#[source] serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, JourneyError>;
