//! Core value types of a wash cycle.
//!
//! Everything here is plain data with no side effects:
//! - Batches, materials and programs
//! - Bounded percentages for dirt degree
//! - The status returned from a cycle
//! - Cycle stages and their immutable history

mod batch;
mod history;
mod percentage;
mod program;
mod stage;
mod status;

pub use batch::{LaundryBatch, Material};
pub use history::{CycleHistory, StageTransition};
pub use percentage::{Percentage, PercentageError};
pub use program::{Program, ProgramConfiguration};
pub use stage::CycleStage;
pub use status::{ErrorCode, LaundryStatus, WashResult};
