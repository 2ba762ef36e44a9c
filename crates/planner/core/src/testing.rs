//! Deterministic collaborator doubles for tests.
//!
//! [`LinearEngine`] is a stand-in for the real attack rating formula: attack
//! grows linearly with each scaling attribute up to a soft cap, and types
//! scaling with an unmet requirement are cut to 60%. That is enough to
//! exercise requirement penalties, tie-breaking and early termination
//! without pulling in game data.

use crate::attributes::{Attribute, Attributes};
use crate::engine::{AttackRating, AttackRatingEngine, StandardTwoHanding, TwoHandingAdjustment};
use crate::weapon::{Affinity, AttackPowerType, ScalingCurve, UpgradeTier, Weapon, WeaponType};

/// Linear attack rating double with a per-attribute soft cap.
#[derive(Clone, Copy, Debug)]
pub struct LinearEngine {
    /// Attribute value beyond which additional points add nothing.
    pub soft_cap: u8,
}

impl LinearEngine {
    pub const UNMET_REQUIREMENT_FACTOR: f64 = 0.6;

    pub const fn new(soft_cap: u8) -> Self {
        Self { soft_cap }
    }

    fn scaled(&self, weapon: &Weapon, attributes: &Attributes, ty: AttackPowerType, base: f64) -> f64 {
        let Some(scaling_attrs) = weapon.damage_scaling_attributes.get(&ty) else {
            return base;
        };
        let bonus: f64 = scaling_attrs
            .iter()
            .map(|attr| {
                let amount = weapon.attribute_scaling.get(attr).copied().unwrap_or(0.0);
                let value = attributes[*attr].min(self.soft_cap);
                base * amount * f64::from(value) / 100.0
            })
            .sum();
        base + bonus
    }
}

impl Default for LinearEngine {
    fn default() -> Self {
        Self::new(80)
    }
}

impl AttackRatingEngine for LinearEngine {
    fn evaluate(
        &self,
        weapon: &Weapon,
        attributes: &Attributes,
        _upgrade_level: u8,
        two_handing: bool,
    ) -> AttackRating {
        let effective = StandardTwoHanding.adjust(attributes, weapon, two_handing);
        let ineffective_attributes: Vec<Attribute> = weapon
            .requirements
            .iter()
            .filter(|&(attr, required)| effective[attr] < required)
            .map(|(attr, _)| attr)
            .collect();

        let is_penalized = |ty: AttackPowerType| {
            weapon
                .damage_scaling_attributes
                .get(&ty)
                .is_some_and(|attrs| attrs.iter().any(|a| ineffective_attributes.contains(a)))
        };

        let mut rating = AttackRating::default();
        for (&ty, &base) in &weapon.attack {
            let mut value = self.scaled(weapon, &effective, ty, base);
            if is_penalized(ty) {
                value *= Self::UNMET_REQUIREMENT_FACTOR;
                rating.ineffective_attack_power_types.push(ty);
            }
            rating.attack_power.insert(ty, value);

            if weapon.is_spell_tool() && ty.is_damage() {
                let scaling = self.scaled(weapon, &effective, ty, 100.0);
                let scaling = if is_penalized(ty) {
                    scaling * Self::UNMET_REQUIREMENT_FACTOR
                } else {
                    scaling
                };
                rating.spell_scaling.insert(ty, scaling);
            }
        }
        rating.ineffective_attributes = ineffective_attributes;
        rating
    }
}

/// Regular +25 standard axe scaling with strength and, less, dexterity.
pub fn sample_axe() -> Weapon {
    Weapon::builder("Battle Axe +25", WeaponType::Axe)
        .weapon_name("Battle Axe")
        .weight(6.0)
        .upgrade(UpgradeTier::Regular, 25)
        .requirement(Attribute::Strength, 12)
        .requirement(Attribute::Dexterity, 8)
        .attack(AttackPowerType::Physical, 200.0)
        .scaling(AttackPowerType::Physical, Attribute::Strength, 1.0, ScalingCurve(0))
        .scaling(AttackPowerType::Physical, Attribute::Dexterity, 0.5, ScalingCurve(0))
        .build()
}

/// Regular +25 heavy greatsword demanding a lot of strength.
pub fn sample_greatsword(strength_requirement: u8) -> Weapon {
    Weapon::builder("Heavy Claymore +25", WeaponType::Greatsword)
        .weapon_name("Claymore")
        .weight(9.0)
        .upgrade(UpgradeTier::Regular, 25)
        .affinity(Affinity::Heavy)
        .requirement(Attribute::Strength, strength_requirement)
        .attack(AttackPowerType::Physical, 250.0)
        .scaling(AttackPowerType::Physical, Attribute::Strength, 1.5, ScalingCurve(0))
        .build()
}

/// Special +10 katana with bleed buildup scaling on arcane.
pub fn sample_katana() -> Weapon {
    Weapon::builder("Rivers of Blood +10", WeaponType::Katana)
        .weapon_name("Rivers of Blood")
        .weight(6.5)
        .upgrade(UpgradeTier::Special, 10)
        .affinity(Affinity::Unique)
        .requirement(Attribute::Dexterity, 18)
        .requirement(Attribute::Arcane, 20)
        .attack(AttackPowerType::Physical, 150.0)
        .attack(AttackPowerType::Fire, 100.0)
        .attack(AttackPowerType::Bleed, 50.0)
        .scaling(AttackPowerType::Physical, Attribute::Dexterity, 0.8, ScalingCurve(0))
        .scaling(AttackPowerType::Fire, Attribute::Arcane, 0.6, ScalingCurve(4))
        .scaling(AttackPowerType::Bleed, Attribute::Arcane, 0.4, ScalingCurve(12))
        .build()
}

/// Regular +25 sacred seal scaling on faith.
pub fn sample_seal() -> Weapon {
    Weapon::builder("Finger Seal +25", WeaponType::SacredSeal)
        .weapon_name("Finger Seal")
        .weight(1.0)
        .upgrade(UpgradeTier::Regular, 25)
        .requirement(Attribute::Faith, 10)
        .attack(AttackPowerType::Physical, 50.0)
        .attack(AttackPowerType::Holy, 10.0)
        .scaling(AttackPowerType::Physical, Attribute::Strength, 0.2, ScalingCurve(0))
        .scaling(AttackPowerType::Holy, Attribute::Faith, 1.2, ScalingCurve(1))
        .incantation_tool()
        .build()
}
