//! Load violations and the error codes they surface as.

use crate::core::{ErrorCode, Material};
use thiserror::Error;

/// Reasons a batch is refused before the cycle starts
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LoadViolation {
    #[error(
        "{weight_kg} kg of {} counts as {effective_kg} kg, above the {limit_kg} kg limit",
        .material.name()
    )]
    TooHeavy {
        material: Material,
        weight_kg: f64,
        effective_kg: f64,
        limit_kg: f64,
    },

    #[error("Load rejected: {message}")]
    Rejected { message: String },
}

impl LoadViolation {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::TooHeavy { .. } => ErrorCode::TooHeavy,
            Self::Rejected { .. } => ErrorCode::UnknownError,
        }
    }
}

/// Collapse a set of violations into the single code reported to callers.
///
/// `TooHeavy` wins over every other code.
pub fn primary_error_code<'a>(
    violations: impl IntoIterator<Item = &'a LoadViolation>,
) -> ErrorCode {
    let mut code = ErrorCode::NoError;
    for violation in violations {
        match violation.error_code() {
            ErrorCode::TooHeavy => return ErrorCode::TooHeavy,
            other => code = other,
        }
    }
    code
}
