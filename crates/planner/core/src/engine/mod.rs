//! Traits describing the attack rating collaborators.
//!
//! The attack rating formula (scaling curves, per-type breakdown) is owned
//! by the host. The planner only relies on the contracts below: both
//! collaborators must be deterministic and side-effect free, and the
//! planner never validates their numeric output.
mod two_handing;

use std::collections::BTreeMap;

pub use two_handing::StandardTwoHanding;

use crate::attributes::{Attribute, Attributes};
use crate::weapon::{AttackPowerType, Weapon};

/// Oracle turning a weapon, attributes and upgrade level into attack numbers.
pub trait AttackRatingEngine: Send + Sync {
    fn evaluate(
        &self,
        weapon: &Weapon,
        attributes: &Attributes,
        upgrade_level: u8,
        two_handing: bool,
    ) -> AttackRating;
}

/// Adjusts attributes for wielding a weapon with both hands.
pub trait TwoHandingAdjustment: Send + Sync {
    fn adjust(&self, attributes: &Attributes, weapon: &Weapon, two_handing: bool) -> Attributes;
}

/// Attack breakdown produced by an [`AttackRatingEngine`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackRating {
    /// Attack power per damage type, and buildup per status type.
    pub attack_power: BTreeMap<AttackPowerType, f64>,
    /// Spell scaling per type; only meaningful for spell tools.
    pub spell_scaling: BTreeMap<AttackPowerType, f64>,
    /// Attributes below the weapon's requirement.
    pub ineffective_attributes: Vec<Attribute>,
    /// Types currently penalized because of unmet requirements.
    pub ineffective_attack_power_types: Vec<AttackPowerType>,
}

impl AttackRating {
    pub fn attack_power(&self, ty: AttackPowerType) -> f64 {
        self.attack_power.get(&ty).copied().unwrap_or(0.0)
    }

    pub fn spell_scaling(&self, ty: AttackPowerType) -> f64 {
        self.spell_scaling.get(&ty).copied().unwrap_or(0.0)
    }

    pub fn is_ineffective(&self, ty: AttackPowerType) -> bool {
        self.ineffective_attack_power_types.contains(&ty)
    }

    /// True when every requirement of the weapon is met.
    pub fn meets_requirements(&self) -> bool {
        self.ineffective_attributes.is_empty()
    }
}
