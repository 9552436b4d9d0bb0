//! Builder API for batches and program configurations.
//!
//! Builders are the only way to create [`LaundryBatch`](crate::core::LaundryBatch)
//! and [`ProgramConfiguration`](crate::core::ProgramConfiguration) values,
//! so required fields are always checked before a cycle sees them.

pub mod batch;
pub mod configuration;
pub mod error;
pub mod macros;

pub use batch::LaundryBatchBuilder;
pub use configuration::ProgramConfigurationBuilder;
pub use error::BuildError;

use crate::core::{LaundryBatch, Material, Program, ProgramConfiguration};

/// Build a batch in one call.
///
/// # Example
///
/// ```
/// use washcycle::builder::batch_of;
/// use washcycle::core::Material;
///
/// let batch = batch_of(5.0, Material::Cotton).unwrap();
/// assert_eq!(batch.weight_kg(), 5.0);
/// ```
pub fn batch_of(weight_kg: f64, material: Material) -> Result<LaundryBatch, BuildError> {
    LaundryBatchBuilder::new()
        .weight_kg(weight_kg)
        .material(material)
        .build()
}

/// Build a program configuration in one call.
///
/// # Example
///
/// ```
/// use washcycle::builder::program_with_spin;
/// use washcycle::core::Program;
///
/// let config = program_with_spin(Program::Long, false).unwrap();
/// assert!(!config.spin());
/// ```
pub fn program_with_spin(program: Program, spin: bool) -> Result<ProgramConfiguration, BuildError> {
    ProgramConfigurationBuilder::new()
        .program(program)
        .spin(spin)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_of_validates_weight() {
        assert!(batch_of(4.0, Material::Wool).is_ok());
        assert_eq!(
            batch_of(0.0, Material::Wool),
            Err(BuildError::InvalidWeight(0.0))
        );
    }

    #[test]
    fn program_with_spin_matches_builder() {
        let built = ProgramConfigurationBuilder::new()
            .program(Program::Medium)
            .spin(true)
            .build()
            .unwrap();

        assert_eq!(program_with_spin(Program::Medium, true), Ok(built));
    }

    #[test]
    fn program_with_spin_keeps_every_program() {
        for program in [
            Program::Short,
            Program::Medium,
            Program::Long,
            Program::Autodetect,
        ] {
            let config = program_with_spin(program, false).unwrap();
            assert_eq!(config.program(), program);
            assert!(!config.spin());
        }
    }
}
