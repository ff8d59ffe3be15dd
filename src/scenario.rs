//! The reward check scenario.
//!
//! Fires every trigger once, in `Trigger::ALL` order, and reports the
//! affected stat after each one:
//!
//! ```text
//! Initial 3.0 1.0 1.0 5.0
//! After rock 10.0
//! After tree 0.95
//! After enemy 3.0
//! After cupcake 5.3
//! ```

use crate::creature::CreatureStats;
use crate::trigger::Trigger;
use std::io::{self, Write};

/// Run the scenario against `stats`, writing one line per step to `out`.
///
/// # Examples
///
/// ```rust
/// use creature_stats::{run_scenario, CreatureStats};
///
/// let mut out = Vec::new();
/// run_scenario(&mut CreatureStats::new(), &mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!(text.lines().last(), Some("After cupcake 5.3"));
/// ```
pub fn run_scenario<W: Write>(stats: &mut CreatureStats, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Initial {:?} {:?} {:?} {:?}",
        stats.max_health(),
        stats.attack_cooldown(),
        stats.attack_damage(),
        stats.move_speed()
    )?;

    for trigger in Trigger::ALL {
        let change = trigger.on_destroyed(stats);
        writeln!(out, "After {} {:?}", trigger, change.after)?;
    }
    out.flush()
}
