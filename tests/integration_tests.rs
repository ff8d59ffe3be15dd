use creature_stats::*;

/// Test the full rock → tree → enemy → cupcake sequence.
#[test]
fn test_trigger_sequence() {
    let mut stats = CreatureStats::new();

    Trigger::Rock.on_destroyed(&mut stats);
    assert_eq!(stats.max_health(), 10.0);

    Trigger::Tree.on_destroyed(&mut stats);
    assert_eq!(stats.attack_cooldown(), 0.95);

    Trigger::Enemy.on_destroyed(&mut stats);
    assert_eq!(stats.attack_damage(), 3.0);

    Trigger::Cupcake.on_destroyed(&mut stats);
    assert_eq!(stats.move_speed(), 5.3);
}

/// Trigger order does not matter: each touches its own stat.
#[test]
fn test_trigger_order_independence() {
    let mut forward = CreatureStats::new();
    for trigger in Trigger::ALL {
        trigger.on_destroyed(&mut forward);
    }

    let mut backward = CreatureStats::new();
    for trigger in Trigger::ALL.iter().rev() {
        trigger.on_destroyed(&mut backward);
    }

    assert_eq!(forward.snapshot(), backward.snapshot());
}

/// Every stat stays within its bounds no matter how often it is rewarded.
#[test]
fn test_bounds_hold_under_repetition() {
    let mut stats = CreatureStats::new();
    let rules = *stats.rules();

    for _ in 0..50 {
        for trigger in Trigger::ALL {
            trigger.on_destroyed(&mut stats);
        }
        for stat in StatKind::ALL {
            let rule = rules.get(stat);
            let value = stats.get(stat);
            match rule.bound {
                Bound::Cap(cap) => assert!(value >= rule.default && value <= cap),
                Bound::Floor(floor) => assert!(value >= floor && value <= rule.default),
            }
        }
    }

    assert_eq!(stats.max_health(), 10.0);
    assert_eq!(stats.attack_cooldown(), 0.1);
    assert_eq!(stats.attack_damage(), 5.0);
    assert_eq!(stats.move_speed(), 6.0);

    for trigger in Trigger::ALL {
        assert!(!trigger.on_destroyed(&mut stats).changed());
    }
}

/// Objects only reward the creature once they are destroyed.
#[test]
fn test_interactables_reward_on_destruction() {
    let mut stats = CreatureStats::new();
    let mut enemy = Interactable::new(Trigger::Enemy);

    // 1.0 damage per hit against 5 hit points
    for _ in 0..4 {
        assert!(matches!(enemy.interact(&mut stats), Ok(Hit::Damaged { .. })));
        assert_eq!(stats.attack_damage(), 1.0);
    }
    let hit = enemy.interact(&mut stats).unwrap();
    assert_eq!(
        hit,
        Hit::Destroyed(StatChange::new(StatKind::AttackDamage, 1.0, 3.0))
    );

    // Stronger attacks destroy the next object faster
    let mut rock = Interactable::new(Trigger::Rock);
    assert!(matches!(rock.interact(&mut stats), Ok(Hit::Damaged { remaining }) if remaining == 2.0));
    assert!(matches!(rock.interact(&mut stats), Ok(Hit::Destroyed(_))));
    assert_eq!(stats.max_health(), 10.0);
    assert_eq!(rock.interact(&mut stats), Ok(Hit::AlreadyDestroyed));
}

/// Custom rules loaded from JSON drive the same triggers.
#[test]
fn test_custom_rules_from_json() {
    let json = r#"{
        "max_health": { "default": 100.0, "step": 25.0, "bound": { "cap": 150.0 } },
        "attack_cooldown": { "default": 3.0, "step": -1.0, "bound": { "floor": 0.5 } }
    }"#;
    let rules = StatRules::from_json(json).unwrap();
    let mut stats = CreatureStats::with_rules(rules).unwrap();

    assert_eq!(stats.max_health(), 100.0);
    assert_eq!(stats.attack_damage(), 1.0);

    Trigger::Rock.on_destroyed(&mut stats);
    Trigger::Rock.on_destroyed(&mut stats);
    Trigger::Rock.on_destroyed(&mut stats);
    assert_eq!(stats.max_health(), 150.0);

    for _ in 0..5 {
        Trigger::Tree.on_destroyed(&mut stats);
    }
    assert_eq!(stats.attack_cooldown(), 0.5);
}

/// Malformed rule files surface as config errors.
#[test]
fn test_malformed_rules() {
    assert!(matches!(
        StatRules::from_json("{ not json"),
        Err(StatError::Config(_))
    ));
    assert!(matches!(
        StatRules::from_json(r#"{ "move_speed": { "default": 5.0, "step": 0.0, "bound": { "cap": 6.0 } } }"#),
        Err(StatError::InvalidRule { stat: StatKind::MoveSpeed, .. })
    ));
}

/// The scenario prints five lines in fixed order.
#[test]
fn test_scenario_report() {
    let mut stats = CreatureStats::new();
    let mut out = Vec::new();
    run_scenario(&mut stats, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let labels: Vec<&str> = text
        .lines()
        .map(|line| line.rsplit_once(' ').map(|(label, _)| label).unwrap_or(line))
        .collect();
    assert_eq!(
        labels,
        vec![
            "Initial 3.0 1.0 1.0",
            "After rock",
            "After tree",
            "After enemy",
            "After cupcake",
        ]
    );
}

/// Snapshots serialize with stable field names.
#[test]
fn test_snapshot_json() {
    let stats = CreatureStats::new();
    let value = serde_json::to_value(stats.snapshot()).unwrap();
    assert_eq!(value["max_health"], 3.0);
    assert_eq!(value["attack_cooldown"], 1.0);
    assert_eq!(value["attack_damage"], 1.0);
    assert_eq!(value["move_speed"], 5.0);
}
