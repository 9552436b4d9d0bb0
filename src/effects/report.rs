//! Cycle reports and errors.

use crate::core::{CycleHistory, CycleStage, LaundryStatus};
use crate::effects::devices::{DetectorError, EngineError, PumpError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that abort a cycle after it was accepted.
///
/// A refused load is not an error; it is reported through
/// [`LaundryStatus`]. These variants cover devices failing mid-cycle.
#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    #[error("Dirt detection failed: {0}")]
    Detector(#[from] DetectorError),

    #[error("Engine failed: {0}")]
    Engine(#[from] EngineError),

    #[error("Water pump failed: {0}")]
    Pump(#[from] PumpError),
}

/// Errors raised while encoding or decoding a [`CycleReport`]
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Deserialization failed: {0}")]
    Deserialization(String),
}

/// Full account of one cycle: its status plus the stages it went through.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CycleReport {
    pub cycle_id: Uuid,
    pub status: LaundryStatus,
    pub history: CycleHistory,
}

impl CycleReport {
    /// Stage the cycle ended in (pure)
    pub fn final_stage(&self) -> CycleStage {
        self.history.current()
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string(self).map_err(|e| ReportError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        serde_json::from_str(json).map_err(|e| ReportError::Deserialization(e.to_string()))
    }
}
