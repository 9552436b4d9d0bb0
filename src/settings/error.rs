//! Settings error types.

use thiserror::Error;

/// Errors that can occur while loading or saving machine settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    Deserialization(String),

    /// Settings were readable but describe an impossible machine
    #[error("Invalid settings: {0}")]
    Invalid(String),
}
