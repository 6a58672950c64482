use thiserror::Error;

use crate::validation::ValidationError;

/// Simulation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("Invalid input: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScheduleError {
    /// Validation problems carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
