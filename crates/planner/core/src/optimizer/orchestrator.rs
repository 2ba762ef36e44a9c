use crate::attributes::{Attributes, PartialAttributes};
use crate::config::OptimizerConfig;
use crate::engine::AttackRatingEngine;
use crate::weapon::UpgradeTier;

use super::error::OptimizeError;
use super::score::BuildScorer;
use super::strategy::{AllocationRequest, AllocationStrategy, GreedyAllocator};
use super::types::{AllocationOutcome, OptimizerInput, OptimizerResult};

/// Drives one optimization from validated input to a packaged result.
///
/// The orchestrator owns no mutable state, so a single instance can serve
/// any number of concurrent requests.
pub struct Optimizer<'a, E, S = GreedyAllocator>
where
    E: AttackRatingEngine + ?Sized,
    S: AllocationStrategy,
{
    engine: &'a E,
    config: &'a OptimizerConfig,
    strategy: S,
}

impl<'a, E: AttackRatingEngine + ?Sized> Optimizer<'a, E> {
    /// Creates an optimizer using the greedy allocation strategy.
    pub fn new(engine: &'a E, config: &'a OptimizerConfig) -> Self {
        Self {
            engine,
            config,
            strategy: GreedyAllocator,
        }
    }
}

impl<'a, E, S> Optimizer<'a, E, S>
where
    E: AttackRatingEngine + ?Sized,
    S: AllocationStrategy,
{
    /// Replaces the allocation strategy.
    pub fn with_strategy<T: AllocationStrategy>(self, strategy: T) -> Optimizer<'a, E, T> {
        Optimizer {
            engine: self.engine,
            config: self.config,
            strategy,
        }
    }

    pub fn config(&self) -> &OptimizerConfig {
        self.config
    }

    /// Optimizes attributes for `input`.
    ///
    /// When the target level cannot cover the class base, user minimums and
    /// weapon requirements, the floor attributes are returned unchanged with
    /// [`AllocationOutcome::FloorOnly`]; the caller is expected to surface
    /// the shortfall.
    ///
    /// # Errors
    ///
    /// Returns an [`OptimizeError`] when the input fails validation. No
    /// allocation is attempted in that case.
    pub fn optimize(&self, input: &OptimizerInput) -> Result<OptimizerResult, OptimizeError> {
        self.validate(input)?;

        let starting = input.starting_class.starting_stats();
        let (floor_attributes, floor_level) = self.floors(input, &starting.attributes, starting.level);

        tracing::debug!(
            class = %input.starting_class,
            target_level = input.target_level,
            floor_level,
            weapons = input.weapons.len(),
            "computed attribute floors"
        );

        let scorer = BuildScorer::new(
            self.engine,
            &input.weapons,
            input.upgrade_level,
            &input.objective_weights,
            self.config,
        );

        let (attributes, level, outcome) = if input.target_level < floor_level {
            let shortfall = floor_level - input.target_level;
            tracing::warn!(
                target_level = input.target_level,
                floor_level,
                shortfall,
                "target level is below the level required by minimums and requirements"
            );
            (
                floor_attributes,
                floor_level,
                AllocationOutcome::FloorOnly { shortfall },
            )
        } else {
            let request = AllocationRequest {
                start: floor_attributes,
                points: input.target_level - floor_level,
                minimums: &input.minimums,
                max_attribute: self.config.max_attribute,
            };
            let allocation = self.strategy.allocate(&request, &scorer);
            tracing::debug!(
                spent = allocation.points_spent,
                unspent = allocation.points_unspent,
                evaluations = allocation.evaluations,
                "allocation finished"
            );
            (
                allocation.attributes,
                floor_level + allocation.points_spent,
                AllocationOutcome::Allocated {
                    spent: allocation.points_spent,
                    unspent: allocation.points_unspent,
                },
            )
        };

        let score = scorer.score(&attributes);
        // validate() guarantees at least one weapon.
        let attack_rating = input
            .weapons
            .first()
            .map(|selection| scorer.rating(&selection.weapon, &attributes))
            .unwrap_or_default();

        tracing::info!(
            class = %input.starting_class,
            level,
            score,
            degraded = matches!(outcome, AllocationOutcome::FloorOnly { .. }),
            "optimization complete"
        );

        Ok(OptimizerResult {
            attributes,
            score,
            attack_rating,
            starting_attributes: starting.attributes,
            starting_level: starting.level,
            floor_attributes,
            floor_level,
            level,
            target_level: input.target_level,
            outcome,
        })
    }

    /// Elementwise maximum of class base, user minimums and the highest
    /// requirement among the selected weapons, with the level it costs.
    fn floors(&self, input: &OptimizerInput, base: &Attributes, base_level: u32) -> (Attributes, u32) {
        let required = input
            .weapons
            .iter()
            .fold(input.minimums, |acc: PartialAttributes, selection| {
                acc.merge_max(&selection.weapon.requirements)
            });
        let floor = base.max_with(&required);
        let extra = floor.points_above(base).unwrap_or(0);
        (floor, base_level + extra)
    }

    fn validate(&self, input: &OptimizerInput) -> Result<(), OptimizeError> {
        self.config.validate()?;

        if input.weapons.is_empty() {
            return Err(OptimizeError::EmptyWeaponSelection);
        }

        let base_level = input.starting_class.starting_stats().level;
        if input.target_level < base_level {
            return Err(OptimizeError::TargetBelowClassLevel {
                class: input.starting_class,
                target: input.target_level,
                base: base_level,
            });
        }

        let max_upgrade = UpgradeTier::Regular.max_level(self.config);
        if input.upgrade_level > max_upgrade {
            return Err(OptimizeError::UpgradeLevelOutOfRange {
                level: input.upgrade_level,
                max: max_upgrade,
            });
        }

        let max = self.config.max_attribute;
        if let Some((attribute, value)) = input
            .minimums
            .iter()
            .find(|&(_, value)| value == 0 || value > max)
        {
            return Err(OptimizeError::MinimumOutOfRange {
                attribute,
                value,
                max,
            });
        }

        for selection in &input.weapons {
            let weapon = &selection.weapon;
            if let Some((attribute, value)) =
                weapon.requirements.iter().find(|&(_, value)| value > max)
            {
                return Err(OptimizeError::RequirementAboveCap {
                    weapon: weapon.name.clone(),
                    attribute,
                    value,
                    max,
                });
            }
            if let Some(weight) = selection.weight {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(OptimizeError::InvalidWeaponWeight {
                        weapon: weapon.name.clone(),
                        weight,
                    });
                }
            }
        }

        input.objective_weights.validate()
    }
}

/// Optimizes `input` with the default config and greedy strategy.
///
/// # Errors
///
/// See [`Optimizer::optimize`].
pub fn optimize<E: AttackRatingEngine + ?Sized>(
    engine: &E,
    input: &OptimizerInput,
) -> Result<OptimizerResult, OptimizeError> {
    let config = OptimizerConfig::default();
    Optimizer::new(engine, &config).optimize(input)
}
