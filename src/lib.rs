//! Washcycle: a washing machine cycle controller
//!
//! Washcycle follows a "pure core, imperative shell" layout. Batches,
//! programs, statuses and load rules are plain values and pure functions;
//! the devices a machine drives are injected behind traits, and only the
//! [`WashingMachine`] sequences side effects.
//!
//! # Core Concepts
//!
//! - **Batches and programs**: immutable values built through builders
//! - **Load rules**: accumulating validation that refuses overloaded drums
//! - **Autodetection**: a dirt sensor picks the program when asked to
//! - **Devices**: `DirtDetector`, `Engine` and `WaterPump` traits
//! - **Status**: every cycle reports success or a structured error code
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use washcycle::core::{ErrorCode, LaundryBatch, Material, Percentage, Program, ProgramConfiguration};
//! use washcycle::effects::{
//!     Engine, EngineError, FixedDirtDetector, PumpError, WashingMachine, WaterPump,
//! };
//!
//! struct Motor;
//! impl Engine for Motor {
//!     fn run_washing(&self, _minutes: u32) -> Result<(), EngineError> { Ok(()) }
//!     fn spin(&self) -> Result<(), EngineError> { Ok(()) }
//! }
//!
//! struct Pump;
//! impl WaterPump for Pump {
//!     fn pour(&self, _weight_kg: f64) -> Result<(), PumpError> { Ok(()) }
//!     fn release(&self) -> Result<(), PumpError> { Ok(()) }
//! }
//!
//! let machine = WashingMachine::new(
//!     Arc::new(FixedDirtDetector(Percentage::new(20.0).unwrap())),
//!     Arc::new(Motor),
//!     Arc::new(Pump),
//! );
//!
//! let config = ProgramConfiguration::builder()
//!     .program(Program::Short)
//!     .spin(true)
//!     .build()
//!     .unwrap();
//!
//! let wool = LaundryBatch::builder()
//!     .weight_kg(5.0)
//!     .material(Material::Wool)
//!     .build()
//!     .unwrap();
//!
//! let status = machine.start(&wool, &config).unwrap();
//! assert_eq!(status.error_code(), ErrorCode::TooHeavy);
//! ```

pub mod builder;
pub mod core;
pub mod effects;
pub mod enforcement;
pub mod settings;

// Re-export commonly used types
pub use crate::core::{
    ErrorCode, LaundryBatch, LaundryStatus, Material, Percentage, Program, ProgramConfiguration,
    WashResult,
};
pub use effects::{CycleError, CycleReport, DirtDetector, Engine, WashingMachine, WaterPump};
pub use settings::MachineSettings;
