//! Ant Colony Optimization (ACO) for number partitioning.
//!
//! Splits a multiset of integers into two subsets whose sums are as close
//! as possible. Ants grow subset A item by item, guided by a per-item
//! pheromone level and a heuristic that favours pairs summing to the
//! target. Good partitions reinforce the pheromone of their subset-A items;
//! all levels evaporate once per iteration.
//!
//! # References
//!
//! - Dorigo, M. & Gambardella, L. M. (1997), "Ant Colony System"
//! - Dorigo, M. & Stützle, T. (2004), *Ant Colony Optimization*, MIT Press

mod config;
mod construct;
mod runner;
mod types;

pub use config::{AcoConfig, AcoConfigError, Construction};
pub use runner::{AcoResult, AntColony};
pub use types::{half_sum, Partition, PheromoneTrail, SINGULARITY_FLOOR};
