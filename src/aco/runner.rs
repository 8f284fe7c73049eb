//! ACO execution loop.
//!
//! # Algorithm
//!
//! 1. Reset every pheromone level to `1.0`
//! 2. For each iteration:
//!    a. Each ant constructs a partition, is evaluated, may replace the
//!    best-so-far, and reinforces the pheromone of its subset-A items
//!    b. Evaporate every pheromone level once
//! 3. Return the best partition seen
//!
//! # Reference
//!
//! Dorigo, M. & Gambardella, L. M. (1997). "Ant Colony System: A Cooperative
//! Learning Approach to the Traveling Salesman Problem", *IEEE Transactions
//! on Evolutionary Computation* 1(1), 53-66.

use super::config::{AcoConfig, AcoConfigError};
use super::construct::construct;
use super::types::{Partition, PheromoneTrail};
use crate::random::rng_from_seed;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use crate::random::create_rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of an ant colony run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// The best partition found.
    pub best: Partition,

    /// `|sum(A) - sum(B)|` of the best partition.
    pub best_objective: u64,

    /// Number of iterations completed.
    pub iterations: usize,

    /// Number of ants evaluated.
    pub evaluations: usize,

    /// Iteration (0-based) in which the best partition was found.
    pub best_iteration: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best objective at the end of each iteration.
    pub objective_history: Vec<u64>,
}

/// Everything one run mutates. Owned by a single run; never shared between
/// runs.
struct RunState {
    trail: PheromoneTrail,
    best: Option<(Partition, u64)>,
    best_iteration: usize,
    evaluations: usize,
}

impl RunState {
    fn new(n: usize) -> Self {
        Self {
            trail: PheromoneTrail::new(n),
            best: None,
            best_iteration: 0,
            evaluations: 0,
        }
    }

    fn best_objective(&self) -> Option<u64> {
        self.best.as_ref().map(|&(_, objective)| objective)
    }

    /// Evaluates an ant, keeps it if strictly better, then reinforces its
    /// subset-A items.
    fn absorb(&mut self, items: &[i64], ant: Partition, iteration: usize, rho: f64) {
        let objective = ant.objective(items);
        self.evaluations += 1;

        let improved = self.best_objective().is_none_or(|best| objective < best);
        if improved {
            trace!(iteration, objective, "new best partition");
            self.best = Some((ant.clone(), objective));
            self.best_iteration = iteration;
        }

        self.trail.reinforce(&ant, objective, rho);
    }
}

/// Ant colony solver for the number partitioning problem.
///
/// Holds a validated, immutable configuration. Every run starts from a
/// fresh pheromone trail, so one solver can be reused freely.
///
/// # Examples
///
/// ```
/// use u_partition::aco::{half_sum, AcoConfig, AntColony};
///
/// let items = [3, 1, 4, 2, 2, 1];
/// let colony = AntColony::new(AcoConfig::new(10, 2.0, 2.0, 0.5, 0.8, 100).with_seed(42))
///     .expect("valid config");
/// let result = colony.run(&items, half_sum(&items));
///
/// assert_eq!(result.best.len(), items.len());
/// let (a, b) = result.best.subset_sums(&items);
/// assert_eq!(a + b, 13);
/// ```
#[derive(Debug, Clone)]
pub struct AntColony {
    config: AcoConfig,
}

impl AntColony {
    /// Creates a solver, rejecting an invalid configuration.
    pub fn new(config: AcoConfig) -> Result<Self, AcoConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Returns only the best partition. Empty `items` give an empty
    /// partition.
    pub fn solve(&self, items: &[i64], target_sum: i64) -> Partition {
        self.run(items, target_sum).best
    }

    /// Runs the colony using the configured seed.
    pub fn run(&self, items: &[i64], target_sum: i64) -> AcoResult {
        self.run_with_cancel(items, target_sum, None)
    }

    /// Runs the colony with an optional cancellation token.
    ///
    /// The flag is checked before every iteration. A run cancelled before
    /// its first ant returns every item in subset B.
    pub fn run_with_cancel(
        &self,
        items: &[i64],
        target_sum: i64,
        cancel: Option<Arc<AtomicBool>>,
    ) -> AcoResult {
        let mut rng = rng_from_seed(self.config.seed);
        self.execute(items, target_sum, &mut rng, cancel.as_deref())
    }

    /// Runs the colony drawing every random number from `rng`.
    ///
    /// The configured seed is ignored.
    pub fn run_with_rng<R: Rng>(&self, items: &[i64], target_sum: i64, rng: &mut R) -> AcoResult {
        self.execute(items, target_sum, rng, None)
    }

    fn execute<R: Rng>(
        &self,
        items: &[i64],
        target_sum: i64,
        rng: &mut R,
        cancel: Option<&AtomicBool>,
    ) -> AcoResult {
        let n = items.len();
        debug!(items = n, target_sum, "starting ant colony run");

        if n == 0 {
            return AcoResult {
                best: Partition::unassigned(0),
                best_objective: 0,
                iterations: 0,
                evaluations: 0,
                best_iteration: 0,
                cancelled: false,
                objective_history: Vec::new(),
            };
        }

        let mut state = RunState::new(n);
        let mut objective_history = Vec::with_capacity(self.config.num_iterations);
        let mut iterations = 0usize;
        let mut cancelled = false;

        for iteration in 0..self.config.num_iterations {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                debug!(iteration, "ant colony run cancelled");
                cancelled = true;
                break;
            }

            self.run_iteration(items, target_sum, &mut state, iteration, rng);
            state.trail.evaporate(self.config.rho);

            iterations += 1;
            if let Some(best) = state.best_objective() {
                objective_history.push(best);
            }
        }

        let (best, best_objective) = state.best.unwrap_or_else(|| {
            let unassigned = Partition::unassigned(n);
            let objective = unassigned.objective(items);
            (unassigned, objective)
        });

        debug!(
            iterations,
            evaluations = state.evaluations,
            best_objective,
            "ant colony run finished"
        );

        AcoResult {
            best,
            best_objective,
            iterations,
            evaluations: state.evaluations,
            best_iteration: state.best_iteration,
            cancelled,
            objective_history,
        }
    }

    /// Lets every ant construct, evaluate and reinforce once.
    fn run_iteration<R: Rng>(
        &self,
        items: &[i64],
        target_sum: i64,
        state: &mut RunState,
        iteration: usize,
        rng: &mut R,
    ) {
        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                let ants = self.construct_concurrently(items, target_sum, &state.trail, rng);
                for ant in ants {
                    state.absorb(items, ant, iteration, self.config.rho);
                }
                return;
            }
        }

        for _ in 0..self.config.num_ants {
            let ant = construct(items, target_sum, &state.trail, &self.config, rng);
            state.absorb(items, ant, iteration, self.config.rho);
        }
    }

    /// Constructs all ants of an iteration against the same pheromone
    /// snapshot. Per-ant seeds are drawn up front, in ant order.
    #[cfg(feature = "parallel")]
    fn construct_concurrently<R: Rng>(
        &self,
        items: &[i64],
        target_sum: i64,
        trail: &PheromoneTrail,
        rng: &mut R,
    ) -> Vec<Partition> {
        let seeds: Vec<u64> = (0..self.config.num_ants).map(|_| rng.random()).collect();
        seeds
            .par_iter()
            .map(|&seed| {
                let mut ant_rng = create_rng(seed);
                construct(items, target_sum, trail, &self.config, &mut ant_rng)
            })
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
