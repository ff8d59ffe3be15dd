//! Stat change records.
//!
//! Every mutation returns a `StatChange` so callers can log or display
//! what a modifier did without re-reading the container.

use crate::stat_kind::StatKind;
use serde::{Deserialize, Serialize};

/// The effect of one modifier application.
///
/// # Examples
///
/// ```rust
/// use creature_stats::{StatChange, StatKind};
///
/// let change = StatChange::new(StatKind::AttackDamage, 1.0, 3.0);
/// assert_eq!(change.delta(), 2.0);
/// assert!(change.changed());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StatChange {
    /// The stat that was modified.
    pub stat: StatKind,
    /// Value before the modifier ran.
    pub before: f64,
    /// Value after the modifier ran.
    pub after: f64,
}

impl StatChange {
    pub fn new(stat: StatKind, before: f64, after: f64) -> Self {
        Self { stat, before, after }
    }

    /// Signed difference `after - before`.
    pub fn delta(&self) -> f64 {
        self.after - self.before
    }

    /// Whether the value moved at all. `false` once the bound is reached.
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

impl std::fmt::Display for StatChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:?} -> {:?}", self.stat, self.before, self.after)
    }
}
