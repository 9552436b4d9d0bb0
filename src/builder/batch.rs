//! Builder for laundry batches.

use crate::builder::error::BuildError;
use crate::core::{LaundryBatch, Material};

/// Builder for [`LaundryBatch`] with a fluent API.
#[derive(Debug, Clone, Default)]
pub struct LaundryBatchBuilder {
    weight_kg: Option<f64>,
    material: Option<Material>,
}

impl LaundryBatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the load weight in kilograms (required, must be positive).
    pub fn weight_kg(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    /// Set the fabric type (required).
    pub fn material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    /// Build the batch.
    /// Returns an error if a field is missing or the weight is not positive.
    pub fn build(self) -> Result<LaundryBatch, BuildError> {
        let weight_kg = self.weight_kg.ok_or(BuildError::MissingWeight)?;
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(BuildError::InvalidWeight(weight_kg));
        }
        let material = self.material.ok_or(BuildError::MissingMaterial)?;

        Ok(LaundryBatch::from_parts(weight_kg, material))
    }
}
