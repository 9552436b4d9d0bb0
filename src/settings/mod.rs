//! Tunable thresholds of the washing machine.
//!
//! Weight limits, dirt-degree cut-offs and program durations live here
//! rather than as scattered constants. Settings can be loaded from JSON or a
//! compact binary snapshot; missing JSON fields fall back to the defaults.

use crate::core::{Percentage, Program};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::SettingsError;

/// Heaviest load the drum accepts, in kilograms of effective weight.
pub const DEFAULT_MAX_WEIGHT_KG: f64 = 8.0;

/// Delicate fabrics weigh this many times their real weight against the limit.
pub const DEFAULT_DELICATE_WEIGHT_FACTOR: f64 = 2.0;

/// Dirt degree at or above which autodetection picks the long program.
pub const DEFAULT_LONG_THRESHOLD: u8 = 50;

/// Dirt degree at or above which autodetection picks the medium program.
pub const DEFAULT_MEDIUM_THRESHOLD: u8 = 10;

/// Machine configuration.
///
/// # Example
///
/// ```rust
/// use washcycle::settings::MachineSettings;
/// use washcycle::core::Program;
///
/// let settings = MachineSettings::from_json(r#"{ "max_weight_kg": 6.0 }"#).unwrap();
/// assert_eq!(settings.max_weight_kg, 6.0);
/// assert_eq!(settings.duration_minutes(Program::Short), 30);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineSettings {
    pub max_weight_kg: f64,
    pub delicate_weight_factor: f64,
    pub long_threshold: u8,
    pub medium_threshold: u8,
    pub short_minutes: u32,
    pub medium_minutes: u32,
    pub long_minutes: u32,
}

impl Default for MachineSettings {
    fn default() -> Self {
        Self {
            max_weight_kg: DEFAULT_MAX_WEIGHT_KG,
            delicate_weight_factor: DEFAULT_DELICATE_WEIGHT_FACTOR,
            long_threshold: DEFAULT_LONG_THRESHOLD,
            medium_threshold: DEFAULT_MEDIUM_THRESHOLD,
            short_minutes: 30,
            medium_minutes: 60,
            long_minutes: 120,
        }
    }
}

impl MachineSettings {
    /// Parse and validate settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)
            .map_err(|e| SettingsError::Deserialization(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string_pretty(self).map_err(|e| SettingsError::Serialization(e.to_string()))
    }

    /// Decode and validate a binary snapshot produced by [`to_binary`](Self::to_binary).
    pub fn from_binary(bytes: &[u8]) -> Result<Self, SettingsError> {
        let settings: Self = bincode::deserialize(bytes)
            .map_err(|e| SettingsError::Deserialization(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, SettingsError> {
        bincode::serialize(self).map_err(|e| SettingsError::Serialization(e.to_string()))
    }

    /// Check that the settings describe a usable machine.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.max_weight_kg.is_finite() || self.max_weight_kg <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "max_weight_kg must be positive, got {}",
                self.max_weight_kg
            )));
        }
        if !self.delicate_weight_factor.is_finite() || self.delicate_weight_factor < 1.0 {
            return Err(SettingsError::Invalid(format!(
                "delicate_weight_factor must be at least 1, got {}",
                self.delicate_weight_factor
            )));
        }
        if self.long_threshold > 100 {
            return Err(SettingsError::Invalid(format!(
                "long_threshold must be within 0..=100, got {}",
                self.long_threshold
            )));
        }
        if self.medium_threshold > self.long_threshold {
            return Err(SettingsError::Invalid(format!(
                "medium_threshold ({}) exceeds long_threshold ({})",
                self.medium_threshold, self.long_threshold
            )));
        }
        if self.short_minutes == 0 || self.medium_minutes == 0 || self.long_minutes == 0 {
            return Err(SettingsError::Invalid(
                "program durations must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Pick a concrete program for a measured dirt degree.
    pub fn program_for_degree(&self, degree: Percentage) -> Program {
        let degree = degree.value();
        if degree >= f64::from(self.long_threshold) {
            Program::Long
        } else if degree >= f64::from(self.medium_threshold) {
            Program::Medium
        } else {
            Program::Short
        }
    }

    /// Wash duration of `program`.
    ///
    /// `Autodetect` is resolved to a concrete program before washing; asked
    /// directly, it gets the long program's duration.
    pub fn duration_minutes(&self, program: Program) -> u32 {
        match program {
            Program::Short => self.short_minutes,
            Program::Medium => self.medium_minutes,
            Program::Long | Program::Autodetect => self.long_minutes,
        }
    }
}
