//! Deterministic build planning logic shared by hosts and tools.
//!
//! `planner-core` decides which attributes a character should invest in and
//! which weapons fit a desired combat style. It exposes two entry points:
//!
//! - [`search::filter_weapons`] narrows a weapon collection to the candidates
//!   matching an upgrade tier and usability constraints.
//! - [`optimizer::Optimizer::optimize`] computes the minimum feasible
//!   attributes for a starting class and weapon selection, then spends the
//!   remaining level budget one point at a time where it scores best.
//!
//! Attack rating numbers come from an [`engine::AttackRatingEngine`]
//! supplied by the host. Everything in this crate is pure and synchronous;
//! callers are free to share weapons, classes and engines across threads.
pub mod attributes;
pub mod class;
pub mod config;
pub mod engine;
pub mod error;
pub mod optimizer;
pub mod search;
pub mod weapon;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use attributes::{Attribute, Attributes, PartialAttributes};
pub use class::{
    ClassError, LevelError, StartingClass, StartingStats, calculate_level, try_calculate_level,
};
pub use config::{ConfigError, OptimizerConfig};
pub use engine::{AttackRating, AttackRatingEngine, StandardTwoHanding, TwoHandingAdjustment};
pub use error::{ErrorSeverity, PlannerError};
pub use optimizer::{
    Allocation, AllocationOutcome, AllocationRequest, AllocationStrategy, BuildEvaluator,
    BuildScorer, GreedyAllocator, ObjectiveWeights, OptimizeError, Optimizer, OptimizerInput,
    OptimizerResult, WeaponSelection, optimize,
};
pub use search::{FilterOptions, WeaponFilter, filter_weapons, to_special_upgrade_level};
pub use weapon::{AttackPowerType, Affinity, UpgradeTier, Weapon, WeaponMetadata, WeaponType};
