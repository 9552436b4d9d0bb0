//! The imperative shell around the pure core.
//!
//! This module holds everything that has side effects: the device traits a
//! machine drives and the [`WashingMachine`] that sequences them.
//!
//! # Key Concepts
//!
//! - **Devices**: `DirtDetector`, `Engine` and `WaterPump` are injected as
//!   shared trait objects, so simulators and test doubles plug in directly
//! - **Machine**: validates the load, resolves the program, then runs
//!   pour → wash → (spin) → release
//! - **Reports**: every cycle yields a status and a stage history

mod devices;
mod machine;
mod report;

pub use devices::{
    DetectorError, DirtDetector, Engine, EngineError, FixedDirtDetector, PumpError, WaterPump,
};
pub use machine::WashingMachine;
pub use report::{CycleError, CycleReport, ReportError};
