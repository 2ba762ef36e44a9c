use crate::attributes::{Attribute, Attributes};
use crate::optimizer::score::BuildEvaluator;

use super::{Allocation, AllocationRequest, AllocationStrategy};

/// Hill climbing, one point at a time.
///
/// Each step tries every attribute below the cap, keeps the increment with
/// the highest resulting score and stops as soon as no increment strictly
/// improves the current score. Remaining points are then left unspent.
///
/// Ties go to the attribute that comes first in declaration order. This is
/// deterministic but not globally optimal: the search never backtracks, so
/// a different point order can reach a higher final score.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyAllocator;

/// Best single-point increment from `current`, with its score, plus the
/// number of candidates evaluated.
fn best_increment(
    current: &Attributes,
    max_attribute: u8,
    evaluator: &dyn BuildEvaluator,
) -> (Option<(Attribute, Attributes, f64)>, u32) {
    Attribute::ALL
        .iter()
        .filter(|&&attr| current[attr] < max_attribute)
        .fold((None, 0), |(best, evaluated), &attr| {
            let candidate = current.incremented(attr);
            let score = evaluator.evaluate(&candidate);
            let best = match best {
                Some((_, _, best_score)) if score <= best_score => best,
                _ => Some((attr, candidate, score)),
            };
            (best, evaluated + 1)
        })
}

impl AllocationStrategy for GreedyAllocator {
    fn allocate(
        &self,
        request: &AllocationRequest<'_>,
        evaluator: &dyn BuildEvaluator,
    ) -> Allocation {
        let mut current = request.start;
        let mut score = evaluator.evaluate(&current);
        let mut trace = vec![score];
        let mut evaluations = 0;
        let mut remaining = request.points;

        while remaining > 0 {
            let (best, evaluated) = best_increment(&current, request.max_attribute, evaluator);
            evaluations += evaluated;

            match best {
                Some((attr, next, next_score)) if next_score > score => {
                    tracing::trace!(%attr, next_score, remaining, "allocated point");
                    current = next;
                    score = next_score;
                    trace.push(score);
                    remaining -= 1;
                }
                _ => {
                    tracing::info!(
                        unspent = remaining,
                        score,
                        "no improving move left, stopping allocation early"
                    );
                    break;
                }
            }
        }

        Allocation {
            attributes: current,
            score,
            points_spent: request.points - remaining,
            points_unspent: remaining,
            trace,
            evaluations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::PartialAttributes;

    fn request(start: Attributes, points: u32, minimums: &PartialAttributes) -> AllocationRequest<'_> {
        AllocationRequest {
            start,
            points,
            minimums,
            max_attribute: 99,
        }
    }

    #[test]
    fn spends_every_point_on_the_best_attribute() {
        let minimums = PartialAttributes::new();
        let eval = |a: &Attributes| f64::from(a[Attribute::Dexterity]) * 2.0 + f64::from(a[Attribute::Strength]);
        let result = GreedyAllocator.allocate(&request(Attributes::uniform(10), 20, &minimums), &eval);

        assert_eq!(result.attributes[Attribute::Dexterity], 30);
        assert_eq!(result.attributes[Attribute::Strength], 10);
        assert_eq!(result.points_spent, 20);
        assert_eq!(result.points_unspent, 0);
        assert_eq!(result.trace.len(), 21);
    }

    #[test]
    fn ties_go_to_declaration_order() {
        let minimums = PartialAttributes::new();
        let eval = |a: &Attributes| f64::from(a[Attribute::Faith]) + f64::from(a[Attribute::Strength]);
        let result = GreedyAllocator.allocate(&request(Attributes::uniform(10), 5, &minimums), &eval);

        // Strength precedes Faith, so every tied step picks Strength.
        assert_eq!(result.attributes[Attribute::Strength], 15);
        assert_eq!(result.attributes[Attribute::Faith], 10);
    }

    #[test]
    fn never_exceeds_the_cap() {
        let minimums = PartialAttributes::new();
        let eval = |a: &Attributes| f64::from(a[Attribute::Arcane]) * 10.0 + f64::from(a[Attribute::Mind]);
        let start = Attributes::uniform(10).with(Attribute::Arcane, 95);
        let result = GreedyAllocator.allocate(&request(start, 10, &minimums), &eval);

        assert_eq!(result.attributes[Attribute::Arcane], 99);
        assert_eq!(result.attributes[Attribute::Mind], 16);
        assert_eq!(result.points_spent, 10);
    }

    #[test]
    fn stops_early_without_improvement() {
        let minimums = PartialAttributes::new();
        let eval = |a: &Attributes| f64::from(a[Attribute::Vigor].min(12));
        let result = GreedyAllocator.allocate(&request(Attributes::uniform(10), 10, &minimums), &eval);

        assert_eq!(result.attributes[Attribute::Vigor], 12);
        assert_eq!(result.points_spent, 2);
        assert_eq!(result.points_unspent, 8);
        // No single increment from the final state improves the score.
        for attr in Attribute::ALL {
            assert!(eval(&result.attributes.incremented(attr)) <= result.score);
        }
    }

    #[test]
    fn zero_budget_returns_start() {
        let minimums = PartialAttributes::new();
        let eval = |a: &Attributes| f64::from(a.total());
        let start = Attributes::uniform(20);
        let result = GreedyAllocator.allocate(&request(start, 0, &minimums), &eval);
        assert_eq!(result.attributes, start);
        assert_eq!(result.evaluations, 0);
        assert_eq!(result.trace, vec![160.0]);
    }

    #[test]
    fn trace_is_non_decreasing_and_bounded() {
        let minimums = PartialAttributes::new();
        let eval = |a: &Attributes| {
            let strength = f64::from(a[Attribute::Strength]);
            let dexterity = f64::from(a[Attribute::Dexterity]);
            strength.sqrt() * 3.0 + dexterity.ln() * 5.0
        };
        let points = 40;
        let result = GreedyAllocator.allocate(&request(Attributes::uniform(10), points, &minimums), &eval);

        assert!(result.trace.windows(2).all(|w| w[1] >= w[0]));
        assert!(result.evaluations <= 8 * points);
        assert!(result.points_spent <= points);
    }
}
