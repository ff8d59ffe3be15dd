//! # creature-stats - Clamped Stat Rewards for Destroyed Objects
//!
//! A creature carries four combat stats. Destroying a world object rewards
//! the creature with one fixed, clamped stat modifier:
//!
//! ```text
//! [Interactable] --destroyed--> [Trigger] --> [StatRule] --> [CreatureStats]
//! ```
//!
//! 1. **Interactables** track hit points and fire their trigger once
//! 2. **Triggers** map an object kind to exactly one stat
//! 3. **Rules** step the stat and clamp it against a cap or floor
//! 4. **CreatureStats** holds the values and reports each change
//!
//! | trigger | stat            | default | step  | bound      |
//! |---------|-----------------|---------|-------|------------|
//! | Rock    | max health      | 3.0     | +15.0 | cap 10.0   |
//! | Tree    | attack cooldown | 1.0     | -0.05 | floor 0.1  |
//! | Enemy   | attack damage   | 1.0     | +2.0  | cap 5.0    |
//! | Cupcake | move speed      | 5.0     | +0.3  | cap 6.0    |
//!
//! ## Example
//!
//! ```rust
//! use creature_stats::*;
//!
//! let mut stats = CreatureStats::new();
//!
//! Trigger::Rock.on_destroyed(&mut stats);
//! assert_eq!(stats.max_health(), 10.0);
//!
//! let change = Trigger::Enemy.on_destroyed(&mut stats);
//! assert_eq!(change.before, 1.0);
//! assert_eq!(change.after, 3.0);
//! ```
//!
//! ## Modules
//!
//! - [`stat_kind`] - Stat identifiers
//! - [`rule`] - Step-and-clamp rules and their JSON configuration
//! - [`creature`] - The stat container
//! - [`change`] - Change records returned by every mutation
//! - [`trigger`] - Destroy triggers
//! - [`interactable`] - Destructible objects carrying a trigger
//! - [`scenario`] - The reward check scenario
//! - [`error`] - Error types

pub mod change;
pub mod creature;
pub mod error;
pub mod interactable;
pub mod rule;
pub mod scenario;
pub mod stat_kind;
pub mod trigger;

// Re-export main types for convenience
pub use change::StatChange;
pub use creature::{CreatureStats, StatSnapshot};
pub use error::StatError;
pub use interactable::{Hit, Interactable};
pub use rule::{Bound, StatRule, StatRules};
pub use scenario::run_scenario;
pub use stat_kind::StatKind;
pub use trigger::Trigger;
