//! Partition labels and pheromone state.

use std::fmt;

/// Floor applied wherever the colony would divide by, or raise to a
/// negative power, an integer quantity that may be zero.
///
/// - The heuristic distance `|set[current] + set[i] - target|` is floored to
///   this value, so an exact target hit scores `floor^(-beta)` instead of
///   infinity.
/// - A perfect partition (objective 0) deposits `1 / floor`.
///
/// Every non-zero integer is at least 1, so floored values always rank
/// strictly ahead of any genuine distance or objective.
pub const SINGULARITY_FLOOR: f64 = 0.5;

/// Returns half the total of `items`, rounded toward negative infinity.
///
/// ```
/// assert_eq!(u_partition::aco::half_sum(&[3, 1, 4, 2, 2, 1]), 6);
/// assert_eq!(u_partition::aco::half_sum(&[-3]), -2);
/// ```
pub fn half_sum(items: &[i64]) -> i64 {
    let total: i128 = items.iter().map(|&x| i128::from(x)).sum();
    let half = total.div_euclid(2);
    i64::try_from(half).unwrap_or(if half < 0 { i64::MIN } else { i64::MAX })
}

/// A two-way split of an item set.
///
/// Label `1` puts an item in subset A, label `0` in subset B. Items start
/// in subset B; construction only ever moves items into subset A.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    labels: Vec<u8>,
}

impl Partition {
    /// All `n` items in subset B.
    pub fn unassigned(n: usize) -> Self {
        Self { labels: vec![0; n] }
    }

    /// Builds a partition from explicit labels. Any non-zero label counts
    /// as subset A and is stored as `1`.
    pub fn from_labels(labels: impl IntoIterator<Item = u8>) -> Self {
        Self {
            labels: labels.into_iter().map(|l| u8::from(l != 0)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The 0/1 labels, aligned with the item set.
    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    pub fn in_subset_a(&self, index: usize) -> bool {
        self.labels[index] == 1
    }

    pub(crate) fn assign_a(&mut self, index: usize) {
        self.labels[index] = 1;
    }

    /// Indices labeled 1.
    pub fn subset_a(&self) -> impl Iterator<Item = usize> + '_ {
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l == 1)
            .map(|(i, _)| i)
    }

    /// Indices labeled 0.
    pub fn subset_b(&self) -> impl Iterator<Item = usize> + '_ {
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l == 0)
            .map(|(i, _)| i)
    }

    /// Sums of subset A and subset B.
    ///
    /// # Panics
    ///
    /// Panics if `items` and the partition differ in length.
    pub fn subset_sums(&self, items: &[i64]) -> (i128, i128) {
        assert_eq!(
            items.len(),
            self.labels.len(),
            "partition has {} labels but {} items were given",
            self.labels.len(),
            items.len()
        );
        self.labels
            .iter()
            .zip(items)
            .fold((0i128, 0i128), |(a, b), (&label, &x)| {
                if label == 1 {
                    (a + i128::from(x), b)
                } else {
                    (a, b + i128::from(x))
                }
            })
    }

    /// `|sum(A) - sum(B)|`, saturating at `u64::MAX`. Lower is better.
    ///
    /// # Panics
    ///
    /// Panics if `items` and the partition differ in length.
    pub fn objective(&self, items: &[i64]) -> u64 {
        let (a, b) = self.subset_sums(items);
        u64::try_from((a - b).unsigned_abs()).unwrap_or(u64::MAX)
    }
}

impl From<Partition> for Vec<u8> {
    fn from(partition: Partition) -> Self {
        partition.labels
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.labels)
    }
}

/// Per-item pheromone levels for one run.
///
/// Created fresh at the start of every run with every level at `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneTrail {
    levels: Vec<f64>,
}

impl PheromoneTrail {
    pub fn new(n: usize) -> Self {
        Self {
            levels: vec![1.0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level(&self, index: usize) -> f64 {
        self.levels[index]
    }

    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    /// Amount deposited by an ant with the given objective: `1 / objective`,
    /// or `1 / SINGULARITY_FLOOR` for a perfect partition.
    pub fn deposit(objective: u64) -> f64 {
        1.0 / (objective as f64).max(SINGULARITY_FLOOR)
    }

    /// Moves every subset-A level toward the ant's deposit:
    /// `p = (1 - rho) * p + rho * deposit`.
    pub fn reinforce(&mut self, partition: &Partition, objective: u64, rho: f64) {
        let delta = Self::deposit(objective);
        for i in partition.subset_a() {
            self.levels[i] = (1.0 - rho) * self.levels[i] + rho * delta;
        }
    }

    /// Scales every level by `1 - rho`.
    pub fn evaporate(&mut self, rho: f64) {
        for level in &mut self.levels {
            *level *= 1.0 - rho;
        }
    }
}
