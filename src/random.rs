//! Seeded random number generation.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator seeded from `config_seed`, or from system entropy
/// when no seed is given.
pub fn rng_from_seed(config_seed: Option<u64>) -> StdRng {
    match config_seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(42);
        let mut b = create_rng(42);
        for _ in 0..16 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_different_seed_different_stream() {
        let mut a = create_rng(1);
        let mut b = create_rng(2);
        let xs: Vec<u64> = (0..4).map(|_| a.random()).collect();
        let ys: Vec<u64> = (0..4).map(|_| b.random()).collect();
        assert_ne!(xs, ys);
    }
}
