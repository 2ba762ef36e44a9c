//! Weapon data model.
//!
//! Weapons are immutable value objects loaded once per data source. A
//! weapon value describes one armament at one specific upgrade level and
//! affinity, e.g. "Heavy Battle Axe +25". Fields that only the attack rating
//! engine reads (base attack, scaling, curves) are carried through untouched.

mod kinds;

use std::collections::BTreeMap;

pub use kinds::{Affinity, AttackPowerType, ScalingCurve, UpgradeTier, WeaponType};

use crate::attributes::{Attribute, PartialAttributes};

/// Search and filtering data that does not affect attack rating.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponMetadata {
    pub weight: f64,
    pub upgrade_level: u8,
    pub tier: UpgradeTier,
    /// Name of the base armament without affinity or upgrade suffix.
    pub weapon_name: String,
    pub affinity: Affinity,
    pub weapon_type: WeaponType,
    /// Paired weapons are wielded as a set and never gain the two-handing bonus.
    pub paired: bool,
}

/// A weapon at a fixed upgrade level and affinity.
///
/// All per-type maps are ordered so that iterating them, and therefore
/// accumulating floating point scores over them, is reproducible.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    /// Unique display name, e.g. "Heavy Battle Axe +25".
    pub name: String,
    pub metadata: WeaponMetadata,
    /// Minimum attributes to wield the weapon without penalty.
    pub requirements: PartialAttributes,
    /// Base attack per damage or status type.
    pub attack: BTreeMap<AttackPowerType, f64>,
    /// Scaling amount per attribute.
    pub attribute_scaling: BTreeMap<Attribute, f64>,
    /// Attributes that scale each damage type.
    pub damage_scaling_attributes: BTreeMap<AttackPowerType, Vec<Attribute>>,
    /// Scaling curve used for each damage type.
    pub damage_scaling_curves: BTreeMap<AttackPowerType, ScalingCurve>,
    pub sorcery_tool: bool,
    pub incantation_tool: bool,
}

impl Weapon {
    /// Starts building a weapon with the given display name and category.
    pub fn builder(name: impl Into<String>, weapon_type: WeaponType) -> WeaponBuilder {
        WeaponBuilder::new(name.into(), weapon_type)
    }

    /// True for staves and seals, whose spell scaling counts towards a build.
    pub fn is_spell_tool(&self) -> bool {
        self.sorcery_tool || self.incantation_tool
    }

    pub fn requirement(&self, attribute: Attribute) -> Option<u8> {
        self.requirements.get(attribute)
    }

    pub fn weight(&self) -> f64 {
        self.metadata.weight
    }

    pub fn weapon_type(&self) -> WeaponType {
        self.metadata.weapon_type
    }

    pub fn affinity(&self) -> Affinity {
        self.metadata.affinity
    }
}

/// Builder for constructing weapons in code (tests, fixtures, adapters).
#[derive(Clone, Debug)]
pub struct WeaponBuilder {
    weapon: Weapon,
}

impl WeaponBuilder {
    fn new(name: String, weapon_type: WeaponType) -> Self {
        Self {
            weapon: Weapon {
                name: name.clone(),
                metadata: WeaponMetadata {
                    weight: 0.0,
                    upgrade_level: 0,
                    tier: UpgradeTier::Regular,
                    weapon_name: name,
                    affinity: Affinity::Standard,
                    weapon_type,
                    paired: false,
                },
                requirements: PartialAttributes::new(),
                attack: BTreeMap::new(),
                attribute_scaling: BTreeMap::new(),
                damage_scaling_attributes: BTreeMap::new(),
                damage_scaling_curves: BTreeMap::new(),
                sorcery_tool: false,
                incantation_tool: false,
            },
        }
    }

    pub fn weapon_name(mut self, weapon_name: impl Into<String>) -> Self {
        self.weapon.metadata.weapon_name = weapon_name.into();
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weapon.metadata.weight = weight;
        self
    }

    pub fn upgrade(mut self, tier: UpgradeTier, level: u8) -> Self {
        self.weapon.metadata.tier = tier;
        self.weapon.metadata.upgrade_level = level;
        self
    }

    pub fn affinity(mut self, affinity: Affinity) -> Self {
        self.weapon.metadata.affinity = affinity;
        self
    }

    pub fn paired(mut self, paired: bool) -> Self {
        self.weapon.metadata.paired = paired;
        self
    }

    pub fn requirement(mut self, attribute: Attribute, value: u8) -> Self {
        self.weapon.requirements.set(attribute, Some(value));
        self
    }

    pub fn attack(mut self, ty: AttackPowerType, base: f64) -> Self {
        self.weapon.attack.insert(ty, base);
        self
    }

    /// Declares that `ty` scales with `attribute` by `amount` on `curve`.
    pub fn scaling(
        mut self,
        ty: AttackPowerType,
        attribute: Attribute,
        amount: f64,
        curve: ScalingCurve,
    ) -> Self {
        self.weapon.attribute_scaling.insert(attribute, amount);
        let attrs = self.weapon.damage_scaling_attributes.entry(ty).or_default();
        if !attrs.contains(&attribute) {
            attrs.push(attribute);
        }
        self.weapon.damage_scaling_curves.insert(ty, curve);
        self
    }

    pub fn sorcery_tool(mut self) -> Self {
        self.weapon.sorcery_tool = true;
        self
    }

    pub fn incantation_tool(mut self) -> Self {
        self.weapon.incantation_tool = true;
        self
    }

    pub fn build(self) -> Weapon {
        self.weapon
    }
}
