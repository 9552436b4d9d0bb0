//! Outcome of a wash cycle.

use super::program::Program;
use serde::{Deserialize, Serialize};

/// Whether a cycle ran to completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WashResult {
    Success,
    Failure,
}

/// Reason a cycle was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    NoError,
    TooHeavy,
    UnknownError,
}

/// Structured result of one `start` call.
///
/// Domain failures (an overloaded drum, a rule violation) are reported here
/// rather than as `Err`; callers inspect [`result`](Self::result) and
/// [`error_code`](Self::error_code).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaundryStatus {
    result: WashResult,
    error_code: ErrorCode,
    program: Option<Program>,
}

impl LaundryStatus {
    /// A completed cycle that ran `program`.
    pub fn success(program: Program) -> Self {
        Self {
            result: WashResult::Success,
            error_code: ErrorCode::NoError,
            program: Some(program),
        }
    }

    /// A refused cycle; nothing was run.
    pub fn failure(error_code: ErrorCode) -> Self {
        Self {
            result: WashResult::Failure,
            error_code,
            program: None,
        }
    }

    pub fn result(&self) -> WashResult {
        self.result
    }

    pub fn error_code(&self) -> ErrorCode {
        self.error_code
    }

    /// The program actually run, after autodetection.
    pub fn program(&self) -> Option<Program> {
        self.program
    }

    pub fn is_success(&self) -> bool {
        self.result == WashResult::Success
    }
}
