//! Error types for stat rules and interactables.
//!
//! The stat mutators themselves never fail. Errors only come from
//! untrusted input: rule files, trigger names and damage values.

use crate::stat_kind::StatKind;
use thiserror::Error;

/// Errors produced while configuring stats or damaging interactables.
///
/// # Examples
///
/// ```rust
/// use creature_stats::StatError;
///
/// let err = StatError::UnknownTrigger("boulder".to_string());
/// assert_eq!(err.to_string(), "Unknown trigger: boulder");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatError {
    /// A trigger name did not match any known object kind.
    #[error("Unknown trigger: {0}")]
    UnknownTrigger(String),

    /// A stat rule is inconsistent.
    ///
    /// Contains the stat and a description of what is wrong.
    #[error("Invalid rule for stat {stat}: {reason}")]
    InvalidRule { stat: StatKind, reason: String },

    /// Damage must be a finite, non-negative number.
    #[error("Invalid damage: {0}")]
    InvalidDamage(f64),

    /// Hit points must be finite and positive.
    #[error("Invalid hit points: {0}")]
    InvalidHitPoints(f64),

    /// A rule file could not be parsed.
    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for StatError {
    fn from(err: serde_json::Error) -> Self {
        StatError::Config(err.to_string())
    }
}
