//! Build errors for batch and configuration builders.

use thiserror::Error;

/// Errors that can occur when building batches and program configurations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Batch weight not specified. Call .weight_kg(kg) before .build()")]
    MissingWeight,

    #[error("Batch weight must be a positive number of kilograms, got {0}")]
    InvalidWeight(f64),

    #[error("Batch material not specified. Call .material(material) before .build()")]
    MissingMaterial,

    #[error("Program not specified. Call .program(program) before .build()")]
    MissingProgram,
}
