//! Per-ant solution construction.
//!
//! An ant starts from a random item and grows subset A one item per step.
//! Each step picks the next item either greedily (probability `q0`) or by
//! roulette over `score^alpha`, where
//!
//! ```text
//! score(i) = pheromone[i] * |set[current] + set[i] - target|^(-beta)
//! ```
//!
//! Only items already in subset A are excluded from the choice.

use super::config::{AcoConfig, Construction};
use super::types::{Partition, PheromoneTrail, SINGULARITY_FLOOR};
use rand::Rng;

/// Builds one candidate partition against a read-only pheromone trail.
pub(crate) fn construct<R: Rng>(
    items: &[i64],
    target: i64,
    trail: &PheromoneTrail,
    config: &AcoConfig,
    rng: &mut R,
) -> Partition {
    let n = items.len();
    let mut partition = Partition::unassigned(n);
    if n == 0 {
        return partition;
    }

    let mut current = rng.random_range(0..n);
    partition.assign_a(current);

    let target_wide = i128::from(target);
    let mut sum_a = i128::from(items[current]);
    // Gap of the empty subset; a start item at or past the target stops at once.
    let initial_gap = target_wide;

    for _ in 1..n {
        if config.construction == Construction::TargetBounded
            && target_reached(target_wide - sum_a, initial_gap)
        {
            break;
        }

        let next = if rng.random::<f64>() < config.q0 {
            greedy_select(items, target, trail, &partition, current, config.beta)
        } else {
            probabilistic_select(
                items,
                target,
                trail,
                &partition,
                current,
                config.alpha,
                config.beta,
                rng,
            )
        };

        if !partition.in_subset_a(next) {
            partition.assign_a(next);
            sum_a += i128::from(items[next]);
        }
        current = next;
    }

    partition
}

/// True once the remaining gap is zero or has changed sign relative to the
/// empty subset.
fn target_reached(gap: i128, initial_gap: i128) -> bool {
    gap == 0 || gap.signum() != initial_gap.signum()
}

/// Desirability of adding item `i` right after item `current`.
///
/// The distance is floored at [`SINGULARITY_FLOOR`]; the result is always
/// finite and non-negative.
pub(crate) fn desirability(
    items: &[i64],
    target: i64,
    trail: &PheromoneTrail,
    current: usize,
    i: usize,
    beta: f64,
) -> f64 {
    let level = trail.level(i);
    if level == 0.0 {
        return 0.0;
    }
    let gap = i128::from(items[current]) + i128::from(items[i]) - i128::from(target);
    let distance = (gap.unsigned_abs() as f64).max(SINGULARITY_FLOOR);
    let score = level * distance.powf(-beta);
    if score.is_finite() {
        score
    } else {
        f64::MAX
    }
}

/// Picks the highest-scoring item outside subset A; ties go to the lowest
/// index. Returns `current` when every item is already in subset A.
pub(crate) fn greedy_select(
    items: &[i64],
    target: i64,
    trail: &PheromoneTrail,
    partition: &Partition,
    current: usize,
    beta: f64,
) -> usize {
    let mut best = current;
    let mut best_score = f64::NEG_INFINITY;

    for i in partition.subset_b() {
        let score = desirability(items, target, trail, current, i, beta);
        if score > best_score {
            best_score = score;
            best = i;
        }
    }

    best
}

/// Roulette selection over `score^alpha` for items outside subset A.
///
/// Falls back to `current` when the draw is not consumed by any item, which
/// happens when subset B is empty or through floating-point roundoff. The
/// caller then labels nothing new at that step.
#[allow(clippy::too_many_arguments)]
pub(crate) fn probabilistic_select<R: Rng>(
    items: &[i64],
    target: i64,
    trail: &PheromoneTrail,
    partition: &Partition,
    current: usize,
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> usize {
    // Cap each weight so the total stays finite.
    let cap = f64::MAX / items.len().max(1) as f64;

    let weights: Vec<(usize, f64)> = partition
        .subset_b()
        .map(|i| {
            let w = desirability(items, target, trail, current, i, beta).powf(alpha);
            (i, if w.is_finite() { w } else { cap }.min(cap))
        })
        .collect();
    let total: f64 = weights.iter().map(|&(_, w)| w).sum();

    let mut remainder = rng.random::<f64>() * total;
    for &(i, w) in &weights {
        remainder -= w;
        if remainder <= 0.0 {
            return i;
        }
    }

    current
}
