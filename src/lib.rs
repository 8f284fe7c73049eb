//! Number partitioning by Ant Colony Optimization.
//!
//! Given a multiset of integers and a target sum (usually half the total),
//! [`aco::AntColony`] searches for a split into two subsets whose sums
//! differ as little as possible. The search is a heuristic: it always
//! returns a valid partition, not necessarily an optimal one.
//!
//! ```
//! use u_partition::aco::{half_sum, AcoConfig, AntColony};
//!
//! let items = [1, 1, 2, 2];
//! let colony = AntColony::new(AcoConfig::new(50, 2.0, 2.0, 0.5, 0.8, 200).with_seed(1))?;
//! let partition = colony.solve(&items, half_sum(&items));
//! assert_eq!(partition.len(), 4);
//! # Ok::<(), u_partition::aco::AcoConfigError>(())
//! ```
//!
//! # Features
//!
//! - `parallel`: construct the ants of an iteration concurrently with rayon
//! - `serde`: serialize configurations and results

pub mod aco;
pub mod random;
