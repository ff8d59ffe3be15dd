//! Destroy triggers.
//!
//! Each kind of world object rewards the creature that destroyed it by
//! firing exactly one stat modifier.

use crate::change::StatChange;
use crate::creature::CreatureStats;
use crate::error::StatError;
use crate::stat_kind::StatKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of object whose destruction fires a modifier.
///
/// | trigger | stat            |
/// |---------|-----------------|
/// | Rock    | max health      |
/// | Tree    | attack cooldown |
/// | Enemy   | attack damage   |
/// | Cupcake | move speed      |
///
/// # Examples
///
/// ```rust
/// use creature_stats::{CreatureStats, Trigger};
///
/// let mut stats = CreatureStats::new();
/// Trigger::Tree.on_destroyed(&mut stats);
/// assert_eq!(stats.attack_cooldown(), 0.95);
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    Rock,
    Tree,
    Enemy,
    Cupcake,
}

impl Trigger {
    /// All triggers, in the order the debug scenario fires them.
    pub const ALL: [Trigger; 4] = [
        Trigger::Rock,
        Trigger::Tree,
        Trigger::Enemy,
        Trigger::Cupcake,
    ];

    /// The stat this trigger modifies.
    pub fn stat(self) -> StatKind {
        match self {
            Trigger::Rock => StatKind::MaxHealth,
            Trigger::Tree => StatKind::AttackCooldown,
            Trigger::Enemy => StatKind::AttackDamage,
            Trigger::Cupcake => StatKind::MoveSpeed,
        }
    }

    /// Lowercase display name.
    pub fn label(self) -> &'static str {
        match self {
            Trigger::Rock => "rock",
            Trigger::Tree => "tree",
            Trigger::Enemy => "enemy",
            Trigger::Cupcake => "cupcake",
        }
    }

    /// Reward `stats` for destroying an object of this kind.
    pub fn on_destroyed(self, stats: &mut CreatureStats) -> StatChange {
        match self {
            Trigger::Rock => stats.increase_max_health(),
            Trigger::Tree => stats.reduce_attack_cooldown(),
            Trigger::Enemy => stats.increase_attack_damage(),
            Trigger::Cupcake => stats.increase_move_speed(),
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Trigger {
    type Err = StatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Trigger::ALL
            .into_iter()
            .find(|trigger| trigger.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StatError::UnknownTrigger(s.to_string()))
    }
}
