//! Build scoring.
//!
//! A build's score is the sum over selected weapons of
//! `weapon_weight × (attack + status + spell - penalty)` where each term
//! weighs the engine's per-type numbers by the objective weights. Weapons
//! are summed rather than averaged: adding a weapon raises the achievable
//! ceiling, and the per-weapon weights alone control relative priority.

use crate::attributes::Attributes;
use crate::config::OptimizerConfig;
use crate::engine::{AttackRating, AttackRatingEngine};
use crate::search::to_special_upgrade_level;
use crate::weapon::{UpgradeTier, Weapon};

use super::types::{ObjectiveWeights, WeaponSelection};

/// Anything that can turn an attribute set into a scalar score.
///
/// Allocation strategies only see this trait, so they stay independent of
/// weapons, engines and weights.
pub trait BuildEvaluator {
    fn evaluate(&self, attributes: &Attributes) -> f64;
}

impl<F> BuildEvaluator for F
where
    F: Fn(&Attributes) -> f64,
{
    fn evaluate(&self, attributes: &Attributes) -> f64 {
        self(attributes)
    }
}

/// Scores attribute sets against a weapon selection and objective weights.
///
/// Weapons are always evaluated one-handed.
pub struct BuildScorer<'a, E: AttackRatingEngine + ?Sized> {
    engine: &'a E,
    weapons: &'a [WeaponSelection],
    upgrade_level: u8,
    weights: &'a ObjectiveWeights,
    config: &'a OptimizerConfig,
}

impl<'a, E: AttackRatingEngine + ?Sized> BuildScorer<'a, E> {
    pub fn new(
        engine: &'a E,
        weapons: &'a [WeaponSelection],
        upgrade_level: u8,
        weights: &'a ObjectiveWeights,
        config: &'a OptimizerConfig,
    ) -> Self {
        Self {
            engine,
            weapons,
            upgrade_level,
            weights,
            config,
        }
    }

    /// Total score of `attributes` across all selected weapons.
    pub fn score(&self, attributes: &Attributes) -> f64 {
        self.weapons
            .iter()
            .map(|selection| {
                let weight = selection.weight.unwrap_or(self.config.default_weapon_weight);
                self.weapon_score(&selection.weapon, attributes) * weight
            })
            .sum()
    }

    /// Unweighted score of a single weapon.
    pub fn weapon_score(&self, weapon: &Weapon, attributes: &Attributes) -> f64 {
        let rating = self.rating(weapon, attributes);
        let multiplier = self.config.ineffective_multiplier;
        let effectiveness = |ty| {
            if rating.is_ineffective(ty) {
                multiplier
            } else {
                1.0
            }
        };

        let attack: f64 = self
            .weights
            .attack_power
            .iter()
            .filter(|&(_, &weight)| weight > 0.0)
            .map(|(&ty, &weight)| rating.attack_power(ty) * weight * effectiveness(ty))
            .sum();

        let status: f64 = self
            .weights
            .status_effect
            .iter()
            .filter(|&(_, &weight)| weight > 0.0)
            .map(|(&ty, &weight)| rating.attack_power(ty) * weight)
            .sum();

        let spell: f64 = if weapon.is_spell_tool() {
            self.weights
                .spell_scaling
                .iter()
                .filter(|&(_, &weight)| weight > 0.0)
                .map(|(&ty, &weight)| rating.spell_scaling(ty) * weight * effectiveness(ty))
                .sum()
        } else {
            0.0
        };

        let unmet = rating.ineffective_attributes.len() as f64;
        attack + status + spell - unmet * self.config.requirement_penalty
    }

    /// Engine breakdown for `weapon` at this scorer's upgrade level.
    pub fn rating(&self, weapon: &Weapon, attributes: &Attributes) -> AttackRating {
        self.engine
            .evaluate(weapon, attributes, self.upgrade_level_for(weapon), false)
    }

    /// Upgrade level handed to the engine for `weapon`: the requested level
    /// for regular weapons, its special equivalent otherwise.
    pub fn upgrade_level_for(&self, weapon: &Weapon) -> u8 {
        match weapon.metadata.tier {
            UpgradeTier::Regular => self.upgrade_level,
            UpgradeTier::Special => to_special_upgrade_level(self.upgrade_level, self.config),
        }
    }
}

impl<E: AttackRatingEngine + ?Sized> BuildEvaluator for BuildScorer<'_, E> {
    fn evaluate(&self, attributes: &Attributes) -> f64 {
        self.score(attributes)
    }
}
