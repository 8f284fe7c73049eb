//! ACO configuration and validation.

use thiserror::Error;

/// How far an ant extends subset A during construction.
///
/// Every construction step labels one more index as subset A. Left alone,
/// `n - 1` steps label every item, so the two policies differ only in when
/// an ant stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Construction {
    /// Stop once the running sum of subset A reaches or crosses the target.
    ///
    /// Items not picked before that point stay in subset B.
    #[default]
    TargetBounded,

    /// Run all `n - 1` steps. Only a probabilistic-rule fallback leaves an
    /// item in subset B, so nearly every ant produces the all-A labeling.
    Exhaustive,
}

/// Reasons an [`AcoConfig`] is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoConfigError {
    #[error("num_ants must be positive")]
    NoAnts,

    #[error("num_iterations must be positive")]
    NoIterations,

    #[error("alpha must be positive and finite, got {0}")]
    InvalidAlpha(f64),

    #[error("beta must be positive and finite, got {0}")]
    InvalidBeta(f64),

    #[error("rho must be in [0, 1], got {0}")]
    InvalidRho(f64),

    #[error("q0 must be in [0, 1], got {0}")]
    InvalidQ0(f64),
}

/// Configuration for the ant colony.
///
/// The six algorithm parameters have no defaults and are passed to
/// [`AcoConfig::new`]. Seed, construction policy and parallelism are
/// optional and set through the `with_*` builders.
///
/// # Examples
///
/// ```
/// use u_partition::aco::{AcoConfig, Construction};
///
/// let config = AcoConfig::new(10, 2.0, 2.0, 0.5, 0.8, 100)
///     .with_seed(42)
///     .with_construction(Construction::TargetBounded);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of ants (candidate constructions) per iteration.
    pub num_ants: usize,

    /// Exponent applied to the desirability score in the probabilistic rule.
    pub alpha: f64,

    /// Exponent of the heuristic term `|set[current] + set[i] - target|^(-beta)`.
    pub beta: f64,

    /// Evaporation and learning rate, in [0, 1].
    pub rho: f64,

    /// Probability of using the greedy rule at a construction step, in [0, 1].
    pub q0: f64,

    /// Number of iterations.
    pub num_iterations: usize,

    /// When an ant stops extending subset A.
    pub construction: Construction,

    /// Construct the ants of one iteration concurrently.
    ///
    /// Takes effect only with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` draws from system entropy.
    pub seed: Option<u64>,
}

impl AcoConfig {
    pub fn new(
        num_ants: usize,
        alpha: f64,
        beta: f64,
        rho: f64,
        q0: f64,
        num_iterations: usize,
    ) -> Self {
        Self {
            num_ants,
            alpha,
            beta,
            rho,
            q0,
            num_iterations,
            construction: Construction::default(),
            parallel: false,
            seed: None,
        }
    }

    pub fn with_construction(mut self, construction: Construction) -> Self {
        self.construction = construction;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), AcoConfigError> {
        if self.num_ants == 0 {
            return Err(AcoConfigError::NoAnts);
        }
        if self.num_iterations == 0 {
            return Err(AcoConfigError::NoIterations);
        }
        if !(self.alpha > 0.0 && self.alpha.is_finite()) {
            return Err(AcoConfigError::InvalidAlpha(self.alpha));
        }
        if !(self.beta > 0.0 && self.beta.is_finite()) {
            return Err(AcoConfigError::InvalidBeta(self.beta));
        }
        if !(0.0..=1.0).contains(&self.rho) {
            return Err(AcoConfigError::InvalidRho(self.rho));
        }
        if !(0.0..=1.0).contains(&self.q0) {
            return Err(AcoConfigError::InvalidQ0(self.q0));
        }
        Ok(())
    }
}
