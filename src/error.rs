//! Error types for the 1RM estimator.

use thiserror::Error;

use crate::i18n::TextKey;

/// Reasons an estimate could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    #[error("weight must be a number greater than 0")]
    InvalidWeight,

    #[error("reps must be a whole number between 1 and 30")]
    InvalidReps,

    #[error("no formula at index {0}")]
    UnknownFormula(usize),
}

impl EstimateError {
    /// Translation key of the user-facing message.
    ///
    /// `UnknownFormula` is a caller bug rather than bad input and has no
    /// message of its own.
    pub fn message_key(&self) -> Option<TextKey> {
        match self {
            EstimateError::InvalidWeight => Some(TextKey::ErrorWeight),
            EstimateError::InvalidReps => Some(TextKey::ErrorReps),
            EstimateError::UnknownFormula(_) => None,
        }
    }
}

/// Errors from parsing user-supplied option values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unsupported language: {0} (expected en or ko)")]
    UnknownLanguage(String),
}
