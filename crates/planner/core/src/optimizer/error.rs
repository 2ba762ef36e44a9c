//! Validation failures surfaced before optimization starts.

use crate::attributes::Attribute;
use crate::class::{ClassError, StartingClass};
use crate::config::ConfigError;
use crate::error::{ErrorSeverity, PlannerError};
use crate::weapon::AttackPowerType;

/// Input rejected by [`super::Optimizer::optimize`].
///
/// None of these are raised once allocation has begun; an infeasible target
/// level is a degraded result, not an error.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum OptimizeError {
    #[error("select at least one weapon to optimize for")]
    EmptyWeaponSelection,

    #[error(transparent)]
    Class(#[from] ClassError),

    #[error("target level {target} is below the starting level {base} of {class}")]
    TargetBelowClassLevel {
        class: StartingClass,
        target: u32,
        base: u32,
    },

    #[error("minimum {attribute} {value} must be between 1 and {max}")]
    MinimumOutOfRange { attribute: Attribute, value: u8, max: u8 },

    #[error("{weapon} requires {attribute} {value}, above the cap of {max}")]
    RequirementAboveCap {
        weapon: String,
        attribute: Attribute,
        value: u8,
        max: u8,
    },

    #[error("weight {weight} for {weapon} must be a non-negative finite number")]
    InvalidWeaponWeight { weapon: String, weight: f64 },

    #[error("{category} weight {weight} for {ty} must be a non-negative finite number")]
    InvalidObjectiveWeight {
        category: &'static str,
        ty: AttackPowerType,
        weight: f64,
    },

    #[error("upgrade level +{level} exceeds the regular maximum of +{max}")]
    UpgradeLevelOutOfRange { level: u8, max: u8 },

    #[error("invalid optimizer configuration: {0}")]
    Config(#[from] ConfigError),
}

impl PlannerError for OptimizeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            OptimizeError::Config(_) => ErrorSeverity::Fatal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OptimizeError::*;
        match self {
            EmptyWeaponSelection => "OPTIMIZE_EMPTY_WEAPON_SELECTION",
            Class(_) => "OPTIMIZE_UNKNOWN_CLASS",
            TargetBelowClassLevel { .. } => "OPTIMIZE_TARGET_BELOW_CLASS_LEVEL",
            MinimumOutOfRange { .. } => "OPTIMIZE_MINIMUM_OUT_OF_RANGE",
            RequirementAboveCap { .. } => "OPTIMIZE_REQUIREMENT_ABOVE_CAP",
            InvalidWeaponWeight { .. } => "OPTIMIZE_INVALID_WEAPON_WEIGHT",
            InvalidObjectiveWeight { .. } => "OPTIMIZE_INVALID_OBJECTIVE_WEIGHT",
            UpgradeLevelOutOfRange { .. } => "OPTIMIZE_UPGRADE_LEVEL_OUT_OF_RANGE",
            Config(_) => "OPTIMIZE_INVALID_CONFIG",
        }
    }
}
