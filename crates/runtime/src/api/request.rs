//! Optimization requests expressed against the runtime's weapon catalog.

use planner_core::{
    Attribute, ObjectiveWeights, OptimizeError, OptimizerInput, PartialAttributes,
    StartingClass, WeaponSelection,
};

use super::errors::Result;
use crate::catalog::WeaponCatalog;

/// Like [`OptimizerInput`], but naming weapons instead of carrying them.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeRequest {
    pub starting_class: StartingClass,
    pub target_level: u32,
    /// Weapon names with an optional priority weight.
    pub weapons: Vec<(String, Option<f64>)>,
    pub upgrade_level: u8,
    pub objective_weights: ObjectiveWeights,
    pub minimums: PartialAttributes,
}

impl OptimizeRequest {
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

    /// Like [`OptimizeRequest::new`], with the class given by name.
    ///
    /// Unknown names are rejected as [`OptimizeError::Class`].
    pub fn for_class_name(class_name: &str, target_level: u32, upgrade_level: u8) -> Result<Self> {
        let starting_class = StartingClass::from_name(class_name).map_err(OptimizeError::from)?;
        Ok(Self::new(starting_class, target_level, upgrade_level))
    }

    #[must_use]
    pub fn with_weapon(mut self, name: impl Into<String>) -> Self {
        self.weapons.push((name.into(), None));
        self
    }

    #[must_use]
    pub fn with_weighted_weapon(mut self, name: impl Into<String>, weight: f64) -> Self {
        self.weapons.push((name.into(), Some(weight)));
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

    /// Resolves weapon names against `catalog`.
    pub(crate) fn resolve(self, catalog: &WeaponCatalog) -> Result<OptimizerInput> {
        let weapons = self
            .weapons
            .iter()
            .map(|(name, weight)| {
                let weapon = catalog.resolve(name)?.clone();
                Ok(WeaponSelection {
                    weapon,
                    weight: *weight,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(OptimizerInput {
            starting_class: self.starting_class,
            target_level: self.target_level,
            weapons,
            upgrade_level: self.upgrade_level,
            objective_weights: self.objective_weights,
            minimums: self.minimums,
        })
    }
}
