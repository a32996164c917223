//! Observation and Transition Models
//!
//! ## Observation Model
//!
//! Each hidden-state hypothesis `i` owns a group of `M` raw readings. Reading
//! `j` is scaled by its source's normalization value and turned into an
//! exponentially decaying piece of evidence; the evidence of all sources is
//! multiplied (a weighted-exponential product of experts):
//!
//! ```text
//! Pr(z | x = i) ∝ Π_j exp(-(z_ij / norm_j) / w_j)
//! ```
//!
//! A reading of zero means perfect agreement with the hypothesis; larger
//! readings decay the evidence, faster for small weights.
//!
//! ## Transition Model
//!
//! The hidden state is sticky: with probability `1 - Δ` it stays the same
//! between steps, and the leaked mass `Δ` is spread evenly over the other
//! `N - 1` states:
//!
//! ```text
//!         ┌ 1-Δ       Δ/(N-1)  …  Δ/(N-1) ┐
//! T =     │ Δ/(N-1)   1-Δ      …  Δ/(N-1) │
//!         └ …                          1-Δ ┘
//! ```
//!
//! `T` is symmetric and doubly stochastic.

use crate::errors::{EstimatorError, EstimatorResult};

/// Evidence for one hypothesis from its group of readings
///
/// All three slices are walked in lockstep; callers guarantee equal lengths.
#[inline]
pub fn observation_likelihood(readings: &[f64], normalization: &[f64], weights: &[f64]) -> f64 {
    readings
        .iter()
        .zip(normalization)
        .zip(weights)
        .map(|((reading, norm), weight)| libm::exp(-(reading / norm) / weight))
        .product()
}

/// Per-source scaling and decay weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationModel<const N: usize, const M: usize> {
    normalization: [f64; M],
    weights: [f64; M],
}

impl<const N: usize, const M: usize> ObservationModel<N, M> {
    /// Create model; values are assumed validated by the estimator
    pub fn new(normalization: [f64; M], weights: [f64; M]) -> Self {
        Self { normalization, weights }
    }

    /// Normalization value per source
    pub fn normalization(&self) -> &[f64; M] {
        &self.normalization
    }

    /// Decay weight per source
    pub fn weights(&self) -> &[f64; M] {
        &self.weights
    }

    /// Raw (unnormalized) likelihood per hypothesis
    ///
    /// `observations` must hold exactly `N * M` readings laid out one group
    /// of `M` per hypothesis and `M >= 1`; `Estimator` checks both before
    /// calling.
    pub(crate) fn likelihood(&self, observations: &[f64]) -> [f64; N] {
        debug_assert!(M > 0 && observations.len() == N * M);
        let mut scores = [0.0; N];
        for (score, group) in scores.iter_mut().zip(observations.chunks_exact(M)) {
            *score = observation_likelihood(group, &self.normalization, &self.weights);
        }
        scores
    }
}

/// Fixed "sticky" transition matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionModel<const N: usize> {
    matrix: [[f64; N]; N],
    delta: f64,
}

impl<const N: usize> TransitionModel<N> {
    /// Build the conditional probability table for leak `delta`
    pub fn new(delta: f64) -> Self {
        let off_diagonal = delta / (N - 1) as f64;
        let mut matrix = [[off_diagonal; N]; N];
        for (i, row) in matrix.iter_mut().enumerate() {
            row[i] = 1.0 - delta;
        }
        Self { matrix, delta }
    }

    /// Transition matrix, `matrix[x][x'] = Pr(x | x')`
    pub fn matrix(&self) -> &[[f64; N]; N] {
        &self.matrix
    }

    /// Leak parameter the matrix was built from
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Predicted belief `Σ_x' Pr(x | x') · Pr(x')` for each `x`
    pub fn propagate(&self, belief: &[f64; N]) -> [f64; N] {
        let mut predicted = [0.0; N];
        for (out, row) in predicted.iter_mut().zip(self.matrix.iter()) {
            *out = row.iter().zip(belief).map(|(p, b)| p * b).sum();
        }
        predicted
    }
}

/// Normalized element-wise product of likelihood and predicted belief
///
/// Fails when the normalizer is zero or not finite: every hypothesis lost
/// all of its evidence and no distribution can be formed.
pub fn posterior_belief<const N: usize>(
    likelihood: &[f64; N],
    transition: &[f64; N],
) -> EstimatorResult<[f64; N]> {
    let mut posterior = [0.0; N];
    for ((out, l), t) in posterior.iter_mut().zip(likelihood).zip(transition) {
        *out = l * t;
    }

    let total: f64 = posterior.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return Err(EstimatorError::DegenerateLikelihood);
    }

    for value in posterior.iter_mut() {
        *value /= total;
    }
    Ok(posterior)
}

/// Index of the largest entry; ties resolve to the first occurrence
pub fn arg_max(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, value) in values.iter().enumerate().skip(1) {
        if *value > values[best] {
            best = i;
        }
    }
    best
}
