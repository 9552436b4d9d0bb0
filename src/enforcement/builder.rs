//! Builder API for creating load rules.

use crate::enforcement::context::LoadContext;
use crate::enforcement::rules::{LoadCheck, LoadRules, LoadValidation};
use crate::enforcement::violations::LoadViolation;
use crate::settings::DEFAULT_DELICATE_WEIGHT_FACTOR;
use stillwater::validation::Validation;

/// Builder for creating load rules
pub struct LoadRulesBuilder {
    max_weight_kg: Option<f64>,
    delicate_factor: f64,
    required_checks: Vec<LoadCheck>,
}

impl LoadRulesBuilder {
    /// Start with no weight limit and no checks.
    ///
    /// A [`WashingMachine`](crate::effects::WashingMachine) enforces the
    /// settings weight limit on top of whatever rules are built here.
    pub fn new() -> Self {
        Self {
            max_weight_kg: None,
            delicate_factor: DEFAULT_DELICATE_WEIGHT_FACTOR,
            required_checks: Vec::new(),
        }
    }

    /// Set the effective weight limit in kilograms
    pub fn max_weight(mut self, kg: f64) -> Self {
        self.max_weight_kg = Some(kg);
        self
    }

    /// Set how much heavier delicate fabrics count
    pub fn delicate_factor(mut self, factor: f64) -> Self {
        self.delicate_factor = factor;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&LoadContext<'_>) -> LoadValidation + Send + Sync + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&LoadContext<'_>) -> bool + Send + Sync + 'static,
    {
        let check = move |ctx: &LoadContext<'_>| {
            if predicate(ctx) {
                Validation::success(())
            } else {
                Validation::fail(LoadViolation::Rejected {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Build the load rules
    pub fn build(self) -> LoadRules {
        LoadRules {
            max_weight_kg: self.max_weight_kg,
            delicate_factor: self.delicate_factor,
            required_checks: self.required_checks,
        }
    }
}

impl Default for LoadRulesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
