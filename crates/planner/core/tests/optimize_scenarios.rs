mod common;

use planner_core::{
    Attribute, AttackPowerType, Attributes, AllocationOutcome, BuildScorer, ObjectiveWeights,
    OptimizerConfig, OptimizerInput, Optimizer, StartingClass, Weapon, WeaponSelection,
    WeaponType, calculate_level, optimize, weapon::ScalingCurve,
};

use common::FlatEngine;

fn cleaver(strength_requirement: u8) -> Weapon {
    Weapon::builder("Cleaver +25", WeaponType::Greataxe)
        .weight(12.0)
        .requirement(Attribute::Strength, strength_requirement)
        .attack(AttackPowerType::Physical, 150.0)
        .scaling(AttackPowerType::Physical, Attribute::Strength, 1.0, ScalingCurve(0))
        .build()
}

fn rapier() -> Weapon {
    Weapon::builder("Rapier +25", WeaponType::ThrustingSword)
        .weight(2.5)
        .requirement(Attribute::Dexterity, 12)
        .attack(AttackPowerType::Physical, 120.0)
        .scaling(AttackPowerType::Physical, Attribute::Dexterity, 1.2, ScalingCurve(0))
        .build()
}

#[test]
fn infeasible_target_returns_floor_only() {
    let input = OptimizerInput::new(StartingClass::Wretch, 25, 25).with_weapon(cleaver(40));
    let result = optimize(&FlatEngine, &input).unwrap();

    assert!(result.is_degraded());
    assert_eq!(result.attributes, result.floor_attributes);
    assert_eq!(result.attributes[Attribute::Strength], 40);
    assert_eq!(result.floor_level, 31);
    assert_eq!(result.outcome, AllocationOutcome::FloorOnly { shortfall: 6 });
}

#[test]
fn result_level_matches_reverse_mapping() {
    let input = OptimizerInput::new(StartingClass::Samurai, 60, 25)
        .with_weapon(cleaver(20))
        .with_weapon(rapier());
    let result = optimize(&FlatEngine, &input).unwrap();

    assert!(!result.is_degraded());
    assert_eq!(result.level, 60);
    // Only the Samurai base is dominated by the result, so the reverse
    // mapping recovers the same level.
    assert_eq!(calculate_level(&result.attributes), 60);
    assert!(result.attack_rating.meets_requirements());
}

#[test]
fn joint_weights_shift_the_allocation() {
    let strength_first = OptimizerInput::new(StartingClass::Wretch, 60, 25)
        .with_weighted_weapon(cleaver(10), 3.0)
        .with_weighted_weapon(rapier(), 1.0);
    let dexterity_first = OptimizerInput::new(StartingClass::Wretch, 60, 25)
        .with_weighted_weapon(cleaver(10), 1.0)
        .with_weighted_weapon(rapier(), 3.0);

    let a = optimize(&FlatEngine, &strength_first).unwrap().attributes;
    let b = optimize(&FlatEngine, &dexterity_first).unwrap().attributes;
    assert!(a[Attribute::Strength] > b[Attribute::Strength]);
    assert!(b[Attribute::Dexterity] > a[Attribute::Dexterity]);
}

#[test]
fn identical_weapons_aggregate_by_weighted_sum() {
    let config = OptimizerConfig::default();
    let weights = ObjectiveWeights::uniform();
    let attrs = Attributes::uniform(30);

    let single = [WeaponSelection::new(rapier())];
    let s = BuildScorer::new(&FlatEngine, &single, 25, &weights, &config).score(&attrs);

    let pair = [
        WeaponSelection::weighted(rapier(), 1.0),
        WeaponSelection::weighted(rapier(), 2.0),
    ];
    let combined = BuildScorer::new(&FlatEngine, &pair, 25, &weights, &config).score(&attrs);
    assert!((combined - 3.0 * s).abs() < 1e-9);
}

#[test]
fn scaling_attributes_never_lower_the_score() {
    let config = OptimizerConfig::default();
    let weights = ObjectiveWeights::uniform();
    let weapons = [WeaponSelection::new(cleaver(10)), WeaponSelection::new(rapier())];
    let scorer = BuildScorer::new(&FlatEngine, &weapons, 25, &weights, &config);

    for value in [12u8, 30, 60, 98] {
        let attrs = Attributes::uniform(value);
        let base = scorer.score(&attrs);
        for attr in [Attribute::Strength, Attribute::Dexterity] {
            assert!(scorer.score(&attrs.incremented(attr)) >= base);
        }
    }
}

#[test]
fn allocation_respects_cap_and_budget() {
    let config = OptimizerConfig::default().with_max_attribute(40);
    let input = OptimizerInput::new(StartingClass::Wretch, 150, 25).with_weapon(cleaver(10));
    let result = Optimizer::new(&FlatEngine, &config).optimize(&input).unwrap();

    assert!(result.attributes.iter().all(|(_, value)| value <= 40));
    assert_eq!(result.attributes[Attribute::Strength], 40);
    let AllocationOutcome::Allocated { spent, unspent } = result.outcome else {
        panic!("expected allocation, got {:?}", result.outcome);
    };
    assert_eq!(spent + unspent, 150 - 1);
    assert_eq!(spent, 30);
    assert_eq!(result.level, 31);
}

#[test]
fn same_input_same_result() {
    let input = OptimizerInput::new(StartingClass::Astrologer, 80, 25)
        .with_weapon(cleaver(16))
        .with_weapon(rapier())
        .with_minimum(Attribute::Vigor, 30);
    let first = optimize(&FlatEngine, &input).unwrap();
    let second = optimize(&FlatEngine, &input).unwrap();
    assert_eq!(first, second);
    assert!(first.attributes[Attribute::Vigor] >= 30);
}
