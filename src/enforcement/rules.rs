//! Load rules checked before a cycle starts, using Validation.

use crate::enforcement::context::LoadContext;
use crate::enforcement::violations::LoadViolation;
use crate::settings::MachineSettings;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a load check: success, or every violation found.
pub type LoadValidation = Validation<(), NonEmptyVec<LoadViolation>>;

/// Type alias for custom load check functions
pub type LoadCheck = Box<dyn Fn(&LoadContext<'_>) -> LoadValidation + Send + Sync>;

/// Rules a batch must satisfy before any device runs.
/// Uses Validation to accumulate ALL violations.
pub struct LoadRules {
    pub(crate) max_weight_kg: Option<f64>,
    pub(crate) delicate_factor: f64,
    pub(crate) required_checks: Vec<LoadCheck>,
}

impl LoadRules {
    /// Weight rule taken from the machine settings, with no custom checks.
    pub fn from_settings(settings: &MachineSettings) -> Self {
        Self {
            max_weight_kg: Some(settings.max_weight_kg),
            delicate_factor: settings.delicate_weight_factor,
            required_checks: Vec::new(),
        }
    }

    /// Enforce all rules, accumulating ALL violations.
    pub fn enforce(&self, context: &LoadContext<'_>) -> LoadValidation {
        let mut checks: Vec<LoadValidation> = Vec::new();

        if let Some(limit_kg) = self.max_weight_kg {
            let effective_kg = context.effective_weight(self.delicate_factor);
            let check = if effective_kg > limit_kg {
                Validation::fail(LoadViolation::TooHeavy {
                    material: context.batch.material(),
                    weight_kg: context.batch.weight_kg(),
                    effective_kg,
                    limit_kg,
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(context));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Violations as a plain list; empty when the load is acceptable.
    pub fn violations(&self, context: &LoadContext<'_>) -> Vec<LoadViolation> {
        match self.enforce(context) {
            Validation::Success(()) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }
}

impl Default for LoadRules {
    fn default() -> Self {
        Self::from_settings(&MachineSettings::default())
    }
}
