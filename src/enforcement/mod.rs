//! Validation-based load checks.
//!
//! Before a cycle touches any device, the batch and its program
//! configuration run through a set of [`LoadRules`]. Checks use
//! Stillwater's `Validation` type, so every violation is collected instead
//! of stopping at the first one; the machine then reports the most
//! significant one as the cycle's [`ErrorCode`](crate::core::ErrorCode).
//!
//! # Example
//!
//! ```rust
//! use washcycle::builder::{batch_of, program_with_spin};
//! use washcycle::core::{Material, Program};
//! use washcycle::enforcement::{LoadContext, LoadRulesBuilder};
//!
//! let rules = LoadRulesBuilder::new()
//!     .max_weight(8.0)
//!     .require_pred(
//!         |ctx| !(ctx.batch.material().is_delicate() && ctx.config.spin()),
//!         "delicate fabrics must not be spun".to_string(),
//!     )
//!     .build();
//!
//! let batch = batch_of(5.0, Material::Wool).unwrap();
//! let config = program_with_spin(Program::Short, true).unwrap();
//!
//! // Too heavy once doubled, and spin requested: both are reported.
//! assert_eq!(rules.violations(&LoadContext::new(&batch, &config)).len(), 2);
//! ```

pub mod builder;
pub mod context;
pub mod rules;
pub mod violations;

pub use builder::LoadRulesBuilder;
pub use context::LoadContext;
pub use rules::{LoadCheck, LoadRules, LoadValidation};
pub use violations::{primary_error_code, LoadViolation};
