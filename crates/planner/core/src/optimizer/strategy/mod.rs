//! Attribute allocation strategies.
//!
//! A strategy receives a starting attribute set and a point budget and
//! returns the attributes it settled on. Strategies only see a
//! [`BuildEvaluator`], never weapons or engines, so alternatives (annealing,
//! exhaustive search for small budgets) can be swapped in without touching
//! the orchestrator.
mod greedy;

pub use greedy::GreedyAllocator;

use crate::attributes::{Attributes, PartialAttributes};

use super::score::BuildEvaluator;

/// Parameters of one allocation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationRequest<'a> {
    /// Attributes to start from; already at or above every floor.
    pub start: Attributes,
    /// Maximum number of points to spend.
    pub points: u32,
    /// User minimums, already folded into `start`.
    pub minimums: &'a PartialAttributes,
    /// Hard cap for any single attribute.
    pub max_attribute: u8,
}

/// Outcome of an allocation run.
#[derive(Clone, Debug, PartialEq)]
pub struct Allocation {
    pub attributes: Attributes,
    pub score: f64,
    pub points_spent: u32,
    pub points_unspent: u32,
    /// Score before the first step followed by the score after each step.
    pub trace: Vec<f64>,
    /// Number of candidate evaluations performed.
    pub evaluations: u32,
}

/// Strategy interface: `inputs → attributes`.
pub trait AllocationStrategy: Send + Sync {
    fn allocate(&self, request: &AllocationRequest<'_>, evaluator: &dyn BuildEvaluator)
    -> Allocation;
}

impl<S: AllocationStrategy + ?Sized> AllocationStrategy for Box<S> {
    fn allocate(
        &self,
        request: &AllocationRequest<'_>,
        evaluator: &dyn BuildEvaluator,
    ) -> Allocation {
        (**self).allocate(request, evaluator)
    }
}
