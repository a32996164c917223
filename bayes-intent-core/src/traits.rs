//! Estimator Abstraction
//!
//! Drivers that feed observation batches step by step program against
//! [`RecursiveEstimator`] rather than a concrete estimator, so the same loop
//! can run a differently parameterized or instrumented filter.

use crate::errors::EstimatorResult;
use crate::estimation::models::arg_max;

/// Filter that keeps a belief over `N` discrete hidden states
///
/// ## Contract
///
/// Implementations must:
/// 1. Never panic on malformed batches; return an error instead
/// 2. Leave the belief untouched when `update` fails
/// 3. Keep the belief a probability distribution after every success
pub trait RecursiveEstimator<const N: usize> {
    /// Fold one time step of observations into the belief, returning the
    /// most probable hidden state
    fn update(&mut self, observations: &[f64]) -> EstimatorResult<usize>;

    /// Current belief
    fn belief(&self) -> &[f64; N];

    /// Forget all evidence; belief returns to uniform
    fn reset(&mut self);

    /// Successful updates since construction or reset
    fn steps(&self) -> u64;

    /// Most probable hidden state under the current belief
    fn most_likely(&self) -> usize {
        arg_max(self.belief())
    }

    /// Check whether one state holds at least `threshold` of the mass
    fn has_converged(&self, threshold: f64) -> bool {
        self.belief()[self.most_likely()] >= threshold
    }
}
