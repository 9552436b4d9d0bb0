//! Wash programs and the configuration requesting one.

use crate::builder::ProgramConfigurationBuilder;
use serde::{Deserialize, Serialize};

/// A named wash profile.
///
/// `Autodetect` is a request, not a runnable program: the machine replaces
/// it with one of the concrete programs based on the batch's dirt degree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Program {
    Short,
    Medium,
    Long,
    Autodetect,
}

impl Program {
    /// Whether this program can be handed to the engine as-is.
    pub fn is_concrete(&self) -> bool {
        !matches!(self, Self::Autodetect)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
            Self::Autodetect => "autodetect",
        }
    }
}

/// Program requested for a cycle, plus whether to spin afterwards.
///
/// # Example
///
/// ```rust
/// use washcycle::core::{Program, ProgramConfiguration};
///
/// let config = ProgramConfiguration::builder()
///     .program(Program::Short)
///     .spin(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.program(), Program::Short);
/// assert!(config.spin());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramConfiguration {
    program: Program,
    spin: bool,
}

impl ProgramConfiguration {
    pub fn builder() -> ProgramConfigurationBuilder {
        ProgramConfigurationBuilder::new()
    }

    pub(crate) fn from_parts(program: Program, spin: bool) -> Self {
        Self { program, spin }
    }

    pub fn program(&self) -> Program {
        self.program
    }

    pub fn spin(&self) -> bool {
        self.spin
    }
}
