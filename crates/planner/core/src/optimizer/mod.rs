//! Attribute optimization.
//!
//! The optimizer computes the minimum attributes a starting class needs to
//! satisfy user minimums and every selected weapon's requirements, then
//! hands the remaining level budget to an [`AllocationStrategy`] that spends
//! it against a [`BuildScorer`].
mod error;
mod orchestrator;
mod score;
mod strategy;
mod types;

pub use error::OptimizeError;
pub use orchestrator::{Optimizer, optimize};
pub use score::{BuildEvaluator, BuildScorer};
pub use strategy::{Allocation, AllocationRequest, AllocationStrategy, GreedyAllocator};
pub use types::{
    AllocationOutcome, ObjectiveWeights, OptimizerInput, OptimizerResult, WeaponSelection,
};
