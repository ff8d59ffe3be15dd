//! Prints creature stats before and after each destroy trigger.
//!
//! Usage: `reward-check [RULES.json]`
//!
//! Set `RUST_LOG=debug` to see every stat change on stderr.

use creature_stats::{run_scenario, CreatureStats, StatError, StatRules};
use std::io;
use std::process;

fn load_rules(path: &str) -> Result<StatRules, StatError> {
    let json = std::fs::read_to_string(path)
        .map_err(|err| StatError::Config(format!("{}: {}", path, err)))?;
    StatRules::from_json(&json)
}

fn main() {
    env_logger::init();

    let stats = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading stat rules from {}...", path);
            load_rules(&path).and_then(CreatureStats::with_rules)
        }
        None => Ok(CreatureStats::new()),
    };

    let mut stats = match stats {
        Ok(stats) => stats,
        Err(err) => {
            log::warn!("Could not use stat rules: {}", err);
            eprintln!("error: {}", err);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    if let Err(err) = run_scenario(&mut stats, &mut stdout.lock()) {
        log::error!("Error writing the report: {}", err);
        process::exit(1);
    }
    log::debug!("Final stats: {:?}", stats.snapshot());
}
