//! The creature stat container.
//!
//! `CreatureStats` holds the four mutable combat stats of one actor
//! together with the rules that move them. Each mutator touches exactly
//! one field and never fails.

use crate::change::StatChange;
use crate::error::StatError;
use crate::rule::StatRules;
use crate::stat_kind::StatKind;
use serde::{Deserialize, Serialize};

/// Current values of all four stats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatSnapshot {
    pub max_health: f64,
    pub attack_cooldown: f64,
    pub attack_damage: f64,
    pub move_speed: f64,
}

/// Mutable combat stats of a single creature.
///
/// Values start at their rule defaults and only move toward their bound:
/// health, damage and speed grow up to a cap, the attack cooldown shrinks
/// down to a floor. Once a bound is reached further applications are no-ops.
///
/// # Examples
///
/// ```rust
/// use creature_stats::CreatureStats;
///
/// let mut stats = CreatureStats::new();
/// assert_eq!(stats.max_health(), 3.0);
///
/// stats.increase_max_health();
/// assert_eq!(stats.max_health(), 10.0);
///
/// // Already capped
/// let change = stats.increase_max_health();
/// assert!(!change.changed());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CreatureStats {
    rules: StatRules,
    max_health: f64,
    attack_cooldown: f64,
    attack_damage: f64,
    move_speed: f64,
}

impl Default for CreatureStats {
    fn default() -> Self {
        Self::from_valid_rules(StatRules::default())
    }
}

impl CreatureStats {
    /// Create a container with the stock rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a container from custom rules.
    ///
    /// # Errors
    ///
    /// Returns `StatError::InvalidRule` if any rule fails validation.
    pub fn with_rules(rules: StatRules) -> Result<Self, StatError> {
        rules.validate()?;
        Ok(Self::from_valid_rules(rules))
    }

    fn from_valid_rules(rules: StatRules) -> Self {
        Self {
            max_health: rules.max_health.default,
            attack_cooldown: rules.attack_cooldown.default,
            attack_damage: rules.attack_damage.default,
            move_speed: rules.move_speed.default,
            rules,
        }
    }

    /// The rules this container was built with.
    pub fn rules(&self) -> &StatRules {
        &self.rules
    }

    pub fn max_health(&self) -> f64 {
        self.max_health
    }

    pub fn attack_cooldown(&self) -> f64 {
        self.attack_cooldown
    }

    pub fn attack_damage(&self) -> f64 {
        self.attack_damage
    }

    pub fn move_speed(&self) -> f64 {
        self.move_speed
    }

    /// Read any stat by kind.
    pub fn get(&self, stat: StatKind) -> f64 {
        match stat {
            StatKind::MaxHealth => self.max_health,
            StatKind::AttackCooldown => self.attack_cooldown,
            StatKind::AttackDamage => self.attack_damage,
            StatKind::MoveSpeed => self.move_speed,
        }
    }

    /// `max_health = min(max_health + step, cap)`
    pub fn increase_max_health(&mut self) -> StatChange {
        self.apply(StatKind::MaxHealth)
    }

    /// `attack_cooldown = max(attack_cooldown - step, floor)`
    pub fn reduce_attack_cooldown(&mut self) -> StatChange {
        self.apply(StatKind::AttackCooldown)
    }

    /// `attack_damage = min(attack_damage + step, cap)`
    pub fn increase_attack_damage(&mut self) -> StatChange {
        self.apply(StatKind::AttackDamage)
    }

    /// `move_speed = min(move_speed + step, cap)`
    pub fn increase_move_speed(&mut self) -> StatChange {
        self.apply(StatKind::MoveSpeed)
    }

    /// Apply the modifier for `stat`, leaving every other field untouched.
    pub fn apply(&mut self, stat: StatKind) -> StatChange {
        let rule = *self.rules.get(stat);
        let slot = self.slot_mut(stat);
        let before = *slot;
        *slot = rule.apply(before);
        let change = StatChange::new(stat, before, *slot);

        if change.changed() {
            log::debug!("{}", change);
        } else {
            log::debug!("{} already at bound {:?}", stat, before);
        }
        change
    }

    /// Restore every stat to its default.
    pub fn reset(&mut self) {
        *self = Self::from_valid_rules(self.rules);
    }

    /// Copy out the current values.
    pub fn snapshot(&self) -> StatSnapshot {
        StatSnapshot {
            max_health: self.max_health,
            attack_cooldown: self.attack_cooldown,
            attack_damage: self.attack_damage,
            move_speed: self.move_speed,
        }
    }

    fn slot_mut(&mut self, stat: StatKind) -> &mut f64 {
        match stat {
            StatKind::MaxHealth => &mut self.max_health,
            StatKind::AttackCooldown => &mut self.attack_cooldown,
            StatKind::AttackDamage => &mut self.attack_damage,
            StatKind::MoveSpeed => &mut self.move_speed,
        }
    }
}
