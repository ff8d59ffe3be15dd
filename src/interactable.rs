//! Destructible world objects.
//!
//! An `Interactable` owns hit points and a [`Trigger`]. Damaging it to zero
//! destroys it and fires the trigger on the attacker's stats, once.

use crate::change::StatChange;
use crate::creature::CreatureStats;
use crate::error::StatError;
use crate::trigger::Trigger;

/// Outcome of a single hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    /// The object survived with `remaining` hit points.
    Damaged { remaining: f64 },
    /// The object was destroyed by this hit and its trigger fired.
    Destroyed(StatChange),
    /// The object was already destroyed. Nothing fired.
    AlreadyDestroyed,
}

/// A destructible object that rewards whoever destroys it.
///
/// # Examples
///
/// ```rust
/// use creature_stats::{CreatureStats, Hit, Interactable, Trigger};
///
/// let mut stats = CreatureStats::new();
/// let mut rock = Interactable::new(Trigger::Rock);
///
/// assert!(matches!(rock.take_damage(3.0, &mut stats), Ok(Hit::Damaged { .. })));
/// assert!(matches!(rock.take_damage(3.0, &mut stats), Ok(Hit::Destroyed(_))));
/// assert_eq!(stats.max_health(), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Interactable {
    kind: Trigger,
    hit_points: f64,
    current_hp: f64,
}

impl Interactable {
    /// Starting hit points when none are given.
    pub const DEFAULT_HIT_POINTS: f64 = 5.0;

    pub fn new(kind: Trigger) -> Self {
        Self {
            kind,
            hit_points: Self::DEFAULT_HIT_POINTS,
            current_hp: Self::DEFAULT_HIT_POINTS,
        }
    }

    /// Create an object with custom starting hit points.
    ///
    /// # Errors
    ///
    /// Returns `StatError::InvalidHitPoints` unless `hit_points` is finite
    /// and positive.
    pub fn with_hit_points(kind: Trigger, hit_points: f64) -> Result<Self, StatError> {
        if !hit_points.is_finite() || hit_points <= 0.0 {
            return Err(StatError::InvalidHitPoints(hit_points));
        }
        Ok(Self {
            kind,
            hit_points,
            current_hp: hit_points,
        })
    }

    pub fn kind(&self) -> Trigger {
        self.kind
    }

    pub fn hit_points(&self) -> f64 {
        self.hit_points
    }

    pub fn current_hp(&self) -> f64 {
        self.current_hp
    }

    pub fn is_destroyed(&self) -> bool {
        self.current_hp <= 0.0
    }

    /// Deal `damage` on behalf of `attacker`.
    ///
    /// # Errors
    ///
    /// Returns `StatError::InvalidDamage` for negative or non-finite damage.
    pub fn take_damage(
        &mut self,
        damage: f64,
        attacker: &mut CreatureStats,
    ) -> Result<Hit, StatError> {
        if !damage.is_finite() || damage < 0.0 {
            return Err(StatError::InvalidDamage(damage));
        }
        if self.is_destroyed() {
            return Ok(Hit::AlreadyDestroyed);
        }

        self.current_hp -= damage;
        log::trace!(
            "{} took {:?} damage, {:?} hp left",
            self.kind,
            damage,
            self.current_hp
        );

        if self.is_destroyed() {
            let change = self.kind.on_destroyed(attacker);
            log::debug!("{} destroyed, {}", self.kind, change);
            Ok(Hit::Destroyed(change))
        } else {
            Ok(Hit::Damaged {
                remaining: self.current_hp,
            })
        }
    }

    /// Hit the object with the attacker's current attack damage.
    pub fn interact(&mut self, attacker: &mut CreatureStats) -> Result<Hit, StatError> {
        let damage = attacker.attack_damage();
        self.take_damage(damage, attacker)
    }

    /// Restore full hit points so the object can be reused.
    pub fn reset(&mut self) {
        self.current_hp = self.hit_points;
    }
}
