//! Partitions a small multiset and prints the labeling.
//!
//! ```text
//! cargo run --example partition
//! ```

use u_partition::aco::{half_sum, AcoConfig, AcoConfigError, AntColony};

fn main() -> Result<(), AcoConfigError> {
    let items = [3, 1, 4, 2, 2, 1];
    let target_sum = half_sum(&items);

    let colony = AntColony::new(AcoConfig::new(10, 2.0, 2.0, 0.5, 0.8, 100))?;
    let solution = colony.solve(&items, target_sum);

    println!("{solution}");
    Ok(())
}
