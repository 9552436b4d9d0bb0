//! Builder for program configurations.

use crate::builder::error::BuildError;
use crate::core::{Program, ProgramConfiguration};

/// Builder for [`ProgramConfiguration`]. Spin defaults to off.
#[derive(Debug, Clone, Default)]
pub struct ProgramConfigurationBuilder {
    program: Option<Program>,
    spin: bool,
}

impl ProgramConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested program (required).
    pub fn program(mut self, program: Program) -> Self {
        self.program = Some(program);
        self
    }

    pub fn spin(mut self, spin: bool) -> Self {
        self.spin = spin;
        self
    }

    pub fn build(self) -> Result<ProgramConfiguration, BuildError> {
        let program = self.program.ok_or(BuildError::MissingProgram)?;
        Ok(ProgramConfiguration::from_parts(program, self.spin))
    }
}
