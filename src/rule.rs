//! Stat rules module.
//!
//! A `StatRule` is the step-and-clamp applied to one stat whenever its
//! modifier fires. The step moves the value toward a single bound: a cap
//! for stats that grow, a floor for stats that shrink.
//!
//! ```text
//! cap:   value = min(value + step, cap)
//! floor: value = max(value + step, floor)
//! ```

use crate::error::StatError;
use crate::stat_kind::StatKind;
use serde::{Deserialize, Serialize};

/// The single bound a stat is clamped against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    /// Upper bound. The step must be positive.
    Cap(f64),
    /// Lower bound. The step must be negative.
    Floor(f64),
}

impl Bound {
    /// The numeric limit, regardless of direction.
    pub fn limit(self) -> f64 {
        match self {
            Bound::Cap(limit) | Bound::Floor(limit) => limit,
        }
    }
}

/// Default value, step and bound for one stat.
///
/// # Examples
///
/// ```rust
/// use creature_stats::rule::{Bound, StatRule};
///
/// let rule = StatRule::new(5.0, 0.3, Bound::Cap(6.0));
/// assert_eq!(rule.apply(5.0), 5.3);
/// assert_eq!(rule.apply(5.9), 6.0);
/// assert_eq!(rule.apply(6.0), 6.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatRule {
    /// Value the stat starts at.
    pub default: f64,
    /// Signed amount added on every application.
    pub step: f64,
    /// Limit the stat may not cross.
    pub bound: Bound,
}

impl StatRule {
    /// Create a new rule.
    pub const fn new(default: f64, step: f64, bound: Bound) -> Self {
        Self {
            default,
            step,
            bound,
        }
    }

    /// Apply one step to `current` and clamp against the bound.
    pub fn apply(&self, current: f64) -> f64 {
        match self.bound {
            Bound::Cap(cap) => (current + self.step).min(cap),
            Bound::Floor(floor) => (current + self.step).max(floor),
        }
    }

    /// Whether `value` sits exactly on the bound.
    pub fn is_at_bound(&self, value: f64) -> bool {
        value == self.bound.limit()
    }

    /// Check that the rule can be applied to `stat` without breaking the
    /// `[default, cap]` / `[floor, default]` range.
    pub fn validate(&self, stat: StatKind) -> Result<(), StatError> {
        let invalid = |reason: &str| StatError::InvalidRule {
            stat,
            reason: reason.to_string(),
        };

        let finite = [self.default, self.step, self.bound.limit()];
        if !finite.iter().all(|v| v.is_finite()) {
            return Err(invalid("values must be finite"));
        }
        if self.step == 0.0 {
            return Err(invalid("step is zero"));
        }

        match self.bound {
            Bound::Cap(cap) => {
                if self.step < 0.0 {
                    return Err(invalid("step must be positive for a cap"));
                }
                if self.default > cap {
                    return Err(invalid("default is above the cap"));
                }
            }
            Bound::Floor(floor) => {
                if self.step > 0.0 {
                    return Err(invalid("step must be negative for a floor"));
                }
                if self.default < floor {
                    return Err(invalid("default is below the floor"));
                }
            }
        }
        Ok(())
    }
}

/// One rule per stat.
///
/// `Default` yields the stock tuning. Missing fields in a JSON rule file
/// fall back to the stock rule for that stat.
///
/// # Examples
///
/// ```rust
/// use creature_stats::rule::{Bound, StatRules};
///
/// let rules = StatRules::from_json(r#"{ "move_speed": { "default": 4.0, "step": 1.0, "bound": { "cap": 8.0 } } }"#).unwrap();
/// assert_eq!(rules.move_speed.bound, Bound::Cap(8.0));
/// assert_eq!(rules.max_health, StatRules::default().max_health);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatRules {
    pub max_health: StatRule,
    pub attack_cooldown: StatRule,
    pub attack_damage: StatRule,
    pub move_speed: StatRule,
}

impl Default for StatRules {
    fn default() -> Self {
        Self {
            max_health: StatRule::new(3.0, 15.0, Bound::Cap(10.0)),
            attack_cooldown: StatRule::new(1.0, -0.05, Bound::Floor(0.1)),
            attack_damage: StatRule::new(1.0, 2.0, Bound::Cap(5.0)),
            move_speed: StatRule::new(5.0, 0.3, Bound::Cap(6.0)),
        }
    }
}

impl StatRules {
    /// Get the rule for `stat`.
    pub fn get(&self, stat: StatKind) -> &StatRule {
        match stat {
            StatKind::MaxHealth => &self.max_health,
            StatKind::AttackCooldown => &self.attack_cooldown,
            StatKind::AttackDamage => &self.attack_damage,
            StatKind::MoveSpeed => &self.move_speed,
        }
    }

    /// Validate every rule.
    pub fn validate(&self) -> Result<(), StatError> {
        StatKind::ALL
            .iter()
            .try_for_each(|&stat| self.get(stat).validate(stat))
    }

    /// Parse and validate rules from JSON.
    pub fn from_json(json: &str) -> Result<Self, StatError> {
        let rules: StatRules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }
}
