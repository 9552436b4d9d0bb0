//! Stage history of a wash cycle.
//!
//! Provides an immutable, timestamped record of the stages a cycle went
//! through.

use super::stage::CycleStage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single move between cycle stages.
///
/// # Example
///
/// ```rust
/// use washcycle::core::{CycleStage, StageTransition};
/// use chrono::Utc;
///
/// let transition = StageTransition {
///     from: CycleStage::Idle,
///     to: CycleStage::Filled,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, CycleStage::Filled);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageTransition {
    pub from: CycleStage,
    pub to: CycleStage,
    /// When the stage was entered
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of stage transitions.
///
/// History is immutable - `record` returns a new history with the
/// transition appended.
///
/// # Example
///
/// ```rust
/// use washcycle::core::{CycleHistory, CycleStage};
///
/// let history = CycleHistory::new()
///     .advance(CycleStage::Filled)
///     .advance(CycleStage::Washed)
///     .advance(CycleStage::Drained);
///
/// assert_eq!(
///     history.get_path(),
///     vec![
///         CycleStage::Idle,
///         CycleStage::Filled,
///         CycleStage::Washed,
///         CycleStage::Drained,
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CycleHistory {
    transitions: Vec<StageTransition>,
}

impl CycleHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StageTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Record a move from the current stage to `to`, stamped now.
    pub fn advance(&self, to: CycleStage) -> Self {
        self.record(StageTransition {
            from: self.current(),
            to,
            timestamp: Utc::now(),
        })
    }

    /// Stage the cycle is in; `Idle` until something is recorded.
    pub fn current(&self) -> CycleStage {
        self.transitions
            .last()
            .map_or(CycleStage::Idle, |transition| transition.to)
    }

    /// Stages traversed, starting with the first `from` stage.
    pub fn get_path(&self) -> Vec<CycleStage> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|transition| transition.to));
        path
    }

    /// Time between the first and last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[StageTransition] {
        &self.transitions
    }
}
