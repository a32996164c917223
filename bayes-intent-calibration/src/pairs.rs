//! Candidate weight pairs
//!
//! Weights live on a grid of multiples of `1 / denominator`. A candidate is an
//! ordered pair of distinct grid values that sum to exactly one; storing the
//! numerators keeps pairs exactly comparable and hashable.

use std::fmt;

/// Ordered pair `(w₁, w₂)` with `w₁ + w₂ = 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeightPair {
    first: u32,
    second: u32,
    denominator: u32,
}

impl WeightPair {
    /// Weight of the first source
    pub fn first(&self) -> f64 {
        self.first as f64 / self.denominator as f64
    }

    /// Weight of the second source
    pub fn second(&self) -> f64 {
        self.second as f64 / self.denominator as f64
    }

    /// Both weights, ready for `Estimator::new`
    pub fn weights(&self) -> [f64; 2] {
        [self.first(), self.second()]
    }
}

impl fmt::Display for WeightPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first(), self.second())
    }
}

/// All candidate pairs on the `1 / denominator` grid, first weight ascending
///
/// Equal halves are excluded: the two sources always get distinct weights.
pub fn candidate_pairs(denominator: u32) -> Vec<WeightPair> {
    (1..denominator)
        .map(|first| WeightPair {
            first,
            second: denominator - first,
            denominator,
        })
        .filter(|pair| pair.first != pair.second)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenths_grid() {
        let pairs = candidate_pairs(10);
        assert_eq!(pairs.len(), 8);
        assert_eq!(pairs[0].weights(), [0.1, 0.9]);
        assert_eq!(pairs[3].weights(), [0.4, 0.6]);
        assert_eq!(pairs[4].weights(), [0.6, 0.4]);
        assert_eq!(pairs[7].weights(), [0.9, 0.1]);
        assert!(pairs.iter().all(|p| p.first() != p.second()));
    }

    #[test]
    fn odd_grid_keeps_every_split() {
        assert_eq!(candidate_pairs(5).len(), 4);
    }

    #[test]
    fn degenerate_grids_are_empty() {
        assert!(candidate_pairs(1).is_empty());
        assert!(candidate_pairs(2).is_empty());
    }

    #[test]
    fn display_shows_weights() {
        assert_eq!(candidate_pairs(10)[1].to_string(), "(0.2, 0.8)");
    }
}
