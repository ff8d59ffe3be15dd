//! Stat identifier module.
//!
//! Provides `StatKind`, the closed set of stats a creature carries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four combat stats held by a [`CreatureStats`](crate::CreatureStats).
///
/// # Examples
///
/// ```rust
/// use creature_stats::StatKind;
///
/// assert_eq!(StatKind::MaxHealth.as_str(), "max_health");
/// assert_eq!(StatKind::ALL.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    MaxHealth,
    AttackCooldown,
    AttackDamage,
    MoveSpeed,
}

impl StatKind {
    /// All stats, in declaration order.
    pub const ALL: [StatKind; 4] = [
        StatKind::MaxHealth,
        StatKind::AttackCooldown,
        StatKind::AttackDamage,
        StatKind::MoveSpeed,
    ];

    /// Get the stable `snake_case` name of this stat.
    pub fn as_str(self) -> &'static str {
        match self {
            StatKind::MaxHealth => "max_health",
            StatKind::AttackCooldown => "attack_cooldown",
            StatKind::AttackDamage => "attack_damage",
            StatKind::MoveSpeed => "move_speed",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
