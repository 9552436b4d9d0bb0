//! Context provided to load checks.

use crate::core::{LaundryBatch, ProgramConfiguration};

/// What a load check gets to look at before the cycle starts
#[derive(Clone, Copy, Debug)]
pub struct LoadContext<'a> {
    pub batch: &'a LaundryBatch,
    pub config: &'a ProgramConfiguration,
}

impl<'a> LoadContext<'a> {
    pub fn new(batch: &'a LaundryBatch, config: &'a ProgramConfiguration) -> Self {
        Self { batch, config }
    }

    /// Batch weight scaled by `delicate_factor` for delicate fabrics (pure)
    pub fn effective_weight(&self, delicate_factor: f64) -> f64 {
        if self.batch.material().is_delicate() {
            self.batch.weight_kg() * delicate_factor
        } else {
            self.batch.weight_kg()
        }
    }
}
