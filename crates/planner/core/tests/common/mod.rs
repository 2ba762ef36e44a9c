#![allow(dead_code)]

use planner_core::{
    Affinity, Attribute, AttackPowerType, AttackRating, AttackRatingEngine, Attributes,
    UpgradeTier, Weapon, WeaponType, weapon::ScalingCurve,
};

/// Uncapped linear engine: every scaling attribute adds `base * amount * value / 100`.
///
/// Types scaling with an unmet requirement are halved and reported as
/// ineffective.
pub struct FlatEngine;

impl AttackRatingEngine for FlatEngine {
    fn evaluate(
        &self,
        weapon: &Weapon,
        attributes: &Attributes,
        _upgrade_level: u8,
        _two_handing: bool,
    ) -> AttackRating {
        let unmet: Vec<Attribute> = weapon
            .requirements
            .iter()
            .filter(|&(attr, required)| attributes[attr] < required)
            .map(|(attr, _)| attr)
            .collect();

        let mut rating = AttackRating::default();
        for (&ty, &base) in &weapon.attack {
            let scaling_attrs = weapon
                .damage_scaling_attributes
                .get(&ty)
                .cloned()
                .unwrap_or_default();
            let bonus: f64 = scaling_attrs
                .iter()
                .map(|attr| {
                    let amount = weapon.attribute_scaling.get(attr).copied().unwrap_or(0.0);
                    base * amount * f64::from(attributes[*attr]) / 100.0
                })
                .sum();
            let mut value = base + bonus;
            if scaling_attrs.iter().any(|attr| unmet.contains(attr)) {
                value *= 0.5;
                rating.ineffective_attack_power_types.push(ty);
            }
            rating.attack_power.insert(ty, value);
        }
        rating.ineffective_attributes = unmet;
        rating
    }
}

pub fn weapon(
    name: &str,
    weapon_type: WeaponType,
    affinity: Affinity,
    tier: UpgradeTier,
    level: u8,
    weight: f64,
) -> Weapon {
    Weapon::builder(name, weapon_type)
        .affinity(affinity)
        .upgrade(tier, level)
        .weight(weight)
        .attack(AttackPowerType::Physical, 100.0)
        .scaling(AttackPowerType::Physical, Attribute::Strength, 0.8, ScalingCurve(0))
        .build()
}

/// Small mixed catalog: axes and katanas across affinities, tiers and levels.
pub fn catalog() -> Vec<Weapon> {
    use Affinity::*;
    use UpgradeTier::*;
    use WeaponType::*;

    vec![
        weapon("Battle Axe +25", Axe, Standard, Regular, 25, 6.0),
        weapon("Battle Axe +24", Axe, Standard, Regular, 24, 6.0),
        weapon("Heavy Battle Axe +25", Axe, Heavy, Regular, 25, 6.0),
        weapon("Rosus' Axe +10", Axe, Unique, Special, 10, 8.5),
        weapon("Stormhawk Axe +10", Axe, Unique, Special, 10, 6.5),
        weapon("Executioner's Axe +25", Axe, Standard, Regular, 25, 24.0),
        weapon("Iron Cleaver +25", Axe, Standard, Regular, 25, 4.5),
        weapon("Uchigatana +25", Katana, Standard, Regular, 25, 5.5),
        weapon("Keen Uchigatana +25", Katana, Keen, Regular, 25, 5.5),
        weapon("Moonveil +10", Katana, Unique, Special, 10, 6.5),
        weapon("Moonveil +9", Katana, Unique, Special, 9, 6.5),
        weapon("Longbow +25", Bow, Unique, Regular, 25, 5.0),
    ]
}
