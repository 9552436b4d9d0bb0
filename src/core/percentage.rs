//! Bounded percentage values.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised when constructing a [`Percentage`].
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum PercentageError {
    #[error("Percentage {0} is outside the range 0..=100")]
    OutOfRange(f64),
}

/// A value in the closed range `0..=100`.
///
/// Used for the dirt degree reported by a detector. The bound is checked
/// once at construction, so every `Percentage` in circulation is valid.
///
/// # Example
///
/// ```rust
/// use washcycle::core::Percentage;
///
/// let degree = Percentage::new(42.0).unwrap();
/// assert_eq!(degree.value(), 42.0);
///
/// assert!(Percentage::new(120.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Percentage(f64);

impl Percentage {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    /// Create a percentage, rejecting values outside `0..=100` and NaN.
    pub fn new(value: f64) -> Result<Self, PercentageError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PercentageError::OutOfRange(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Percentage {
    type Error = PercentageError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for f64 {
    fn from(percentage: Percentage) -> Self {
        percentage.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
