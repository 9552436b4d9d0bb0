//! Laundry batches and the materials they are made of.

use crate::builder::LaundryBatchBuilder;
use serde::{Deserialize, Serialize};

/// Fabric type of a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    Cotton,
    Synthetic,
    Jeans,
    Wool,
    Delicate,
}

impl Material {
    /// Delicate fabrics count more heavily against the drum's weight limit.
    pub fn is_delicate(&self) -> bool {
        matches!(self, Self::Wool | Self::Delicate)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Cotton => "cotton",
            Self::Synthetic => "synthetic",
            Self::Jeans => "jeans",
            Self::Wool => "wool",
            Self::Delicate => "delicate",
        }
    }
}

/// One load of laundry.
///
/// Batches are immutable and can only be created through
/// [`LaundryBatch::builder`], which guarantees a finite, positive weight.
///
/// # Example
///
/// ```rust
/// use washcycle::core::{LaundryBatch, Material};
///
/// let batch = LaundryBatch::builder()
///     .weight_kg(5.0)
///     .material(Material::Cotton)
///     .build()
///     .unwrap();
///
/// assert_eq!(batch.weight_kg(), 5.0);
/// assert_eq!(batch.material(), Material::Cotton);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LaundryBatch {
    weight_kg: f64,
    material: Material,
}

impl LaundryBatch {
    pub fn builder() -> LaundryBatchBuilder {
        LaundryBatchBuilder::new()
    }

    pub(crate) fn from_parts(weight_kg: f64, material: Material) -> Self {
        Self {
            weight_kg,
            material,
        }
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn material(&self) -> Material {
        self.material
    }
}
