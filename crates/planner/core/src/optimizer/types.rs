//! Optimizer inputs and outputs.

use std::collections::BTreeMap;

use crate::attributes::{Attribute, Attributes, PartialAttributes};
use crate::class::StartingClass;
use crate::engine::AttackRating;
use crate::weapon::{AttackPowerType, Weapon};

use super::error::OptimizeError;

/// How much each damage, status and spell-scaling type matters for a build.
///
/// Types absent from a map contribute nothing.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ObjectiveWeights {
    pub attack_power: BTreeMap<AttackPowerType, f64>,
    pub status_effect: BTreeMap<AttackPowerType, f64>,
    pub spell_scaling: BTreeMap<AttackPowerType, f64>,
}

impl ObjectiveWeights {
    /// Weight 1 for every damage type and every status type, no spell scaling.
    pub fn uniform() -> Self {
        Self {
            attack_power: AttackPowerType::DAMAGE_TYPES
                .iter()
                .map(|&ty| (ty, 1.0))
                .collect(),
            status_effect: AttackPowerType::STATUS_TYPES
                .iter()
                .map(|&ty| (ty, 1.0))
                .collect(),
            spell_scaling: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_attack_power(mut self, ty: AttackPowerType, weight: f64) -> Self {
        self.attack_power.insert(ty, weight);
        self
    }

    #[must_use]
    pub fn with_status_effect(mut self, ty: AttackPowerType, weight: f64) -> Self {
        self.status_effect.insert(ty, weight);
        self
    }

    #[must_use]
    pub fn with_spell_scaling(mut self, ty: AttackPowerType, weight: f64) -> Self {
        self.spell_scaling.insert(ty, weight);
        self
    }

    /// Rejects negative or non-finite weights.
    ///
    /// # Errors
    ///
    /// Returns [`OptimizeError::InvalidObjectiveWeight`] for the first
    /// offending entry.
    pub fn validate(&self) -> Result<(), OptimizeError> {
        let categories = [
            ("attack power", &self.attack_power),
            ("status effect", &self.status_effect),
            ("spell scaling", &self.spell_scaling),
        ];
        for (category, weights) in categories {
            if let Some((&ty, &weight)) = weights
                .iter()
                .find(|&(_, &w)| !w.is_finite() || w < 0.0)
            {
                return Err(OptimizeError::InvalidObjectiveWeight {
                    category,
                    ty,
                    weight,
                });
            }
        }
        Ok(())
    }
}

/// A weapon selected for joint optimization.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponSelection {
    pub weapon: Weapon,
    /// Relative priority; `None` uses the configured default (1).
    pub weight: Option<f64>,
}

impl WeaponSelection {
    pub fn new(weapon: Weapon) -> Self {
        Self {
            weapon,
            weight: None,
        }
    }

    pub fn weighted(weapon: Weapon, weight: f64) -> Self {
        Self {
            weapon,
            weight: Some(weight),
        }
    }
}

/// Everything the optimizer needs for one request.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizerInput {
    pub starting_class: StartingClass,
    pub target_level: u32,
    pub weapons: Vec<WeaponSelection>,
    /// Upgrade level on the regular scale; special weapons use the
    /// equivalent special level.
    pub upgrade_level: u8,
    pub objective_weights: ObjectiveWeights,
    /// Per-attribute floors independent of class and weapon requirements.
    pub minimums: PartialAttributes,
}

impl OptimizerInput {
    pub fn new(starting_class: StartingClass, target_level: u32, upgrade_level: u8) -> Self {
        Self {
            starting_class,
            target_level,
            weapons: Vec::new(),
            upgrade_level,
            objective_weights: ObjectiveWeights::uniform(),
            minimums: PartialAttributes::new(),
        }
    }

    #[must_use]
    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.weapons.push(WeaponSelection::new(weapon));
        self
    }

    #[must_use]
    pub fn with_weighted_weapon(mut self, weapon: Weapon, weight: f64) -> Self {
        self.weapons.push(WeaponSelection::weighted(weapon, weight));
        self
    }

    #[must_use]
    pub fn with_objective_weights(mut self, weights: ObjectiveWeights) -> Self {
        self.objective_weights = weights;
        self
    }

    #[must_use]
    pub fn with_minimum(mut self, attribute: Attribute, value: u8) -> Self {
        self.minimums.set(attribute, Some(value));
        self
    }
}

/// How the optimizer arrived at the final attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AllocationOutcome {
    /// The strategy ran; `unspent` points were left because no move improved
    /// the score.
    Allocated { spent: u32, unspent: u32 },
    /// The target level is below the level the floors already require, so
    /// the floors are returned as-is. `shortfall` is the number of levels
    /// missing.
    FloorOnly { shortfall: u32 },
}

/// Result of one optimization.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizerResult {
    pub attributes: Attributes,
    pub score: f64,
    /// Attack breakdown of the first selected weapon.
    pub attack_rating: AttackRating,
    /// Class base attributes before any floor or allocation.
    pub starting_attributes: Attributes,
    pub starting_level: u32,
    /// Attributes after applying minimums and weapon requirements.
    pub floor_attributes: Attributes,
    pub floor_level: u32,
    /// Level of the returned attributes.
    pub level: u32,
    pub target_level: u32,
    pub outcome: AllocationOutcome,
}

impl OptimizerResult {
    /// True when the target level could not even cover the floors.
    pub fn is_degraded(&self) -> bool {
        matches!(self.outcome, AllocationOutcome::FloorOnly { .. })
    }

    /// Points the strategy chose not to spend.
    pub fn unspent_points(&self) -> u32 {
        match self.outcome {
            AllocationOutcome::Allocated { unspent, .. } => unspent,
            AllocationOutcome::FloorOnly { .. } => 0,
        }
    }
}
