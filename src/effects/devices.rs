//! Device traits the machine drives.
//!
//! These traits define the boundary between the cycle logic and whatever
//! sits behind it: real drivers, simulators, or test doubles. Devices are
//! shared with their owner, so methods take `&self`; implementations that
//! keep state use interior mutability.

use crate::core::{LaundryBatch, Percentage};
use thiserror::Error;

/// Errors reported by a dirt detector
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DetectorError {
    #[error("Dirt sensor unavailable: {0}")]
    Unavailable(String),

    #[error("Dirt sensor returned an unusable reading: {0}")]
    InvalidReading(String),
}

/// Errors reported by the drum engine
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    #[error("Engine stalled after {minutes} minutes")]
    Stalled { minutes: u32 },

    #[error("Spin aborted: {0}")]
    SpinAborted(String),

    #[error("Engine fault: {0}")]
    Fault(String),
}

/// Errors reported by the water pump
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PumpError {
    #[error("No water supply")]
    NoSupply,

    #[error("Drain blocked")]
    DrainBlocked,

    #[error("Pump fault: {0}")]
    Fault(String),
}

/// Sensor measuring how soiled a batch is.
pub trait DirtDetector: Send + Sync {
    /// Measure the dirt degree of `batch` without altering it.
    fn detect_dirt_degree(&self, batch: &LaundryBatch) -> Result<Percentage, DetectorError>;
}

/// Drum motor.
pub trait Engine: Send + Sync {
    /// Run the wash motion for `minutes`.
    fn run_washing(&self, minutes: u32) -> Result<(), EngineError>;

    /// Spin the drum to extract water.
    fn spin(&self) -> Result<(), EngineError>;
}

/// Pump filling and draining the drum.
pub trait WaterPump: Send + Sync {
    /// Pour water for a load of `weight_kg`.
    fn pour(&self, weight_kg: f64) -> Result<(), PumpError>;

    /// Drain the drum.
    fn release(&self) -> Result<(), PumpError>;
}

/// Detector that always reports the same degree.
///
/// Handy when a deployment has no sensor fitted and autodetection should
/// settle on a fixed program.
#[derive(Debug, Clone, Copy)]
pub struct FixedDirtDetector(pub Percentage);

impl DirtDetector for FixedDirtDetector {
    fn detect_dirt_degree(&self, _batch: &LaundryBatch) -> Result<Percentage, DetectorError> {
        Ok(self.0)
    }
}
