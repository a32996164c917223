//! Recursive Bayesian Estimator over Discrete Hidden States
//!
//! ## Update Equation
//!
//! ```text
//! Pr(xₜ | z₁:ₜ) = η · Pr(zₜ | xₜ) · Σ_x' Pr(xₜ | x') · Pr(x' | z₁:ₜ₋₁)
//!                     └─ likelihood ┘   └──── transition term ────┘
//! x̂ₜ = argmax_x Pr(xₜ = x | z₁:ₜ)
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! observations ─→ check dims ─→ likelihood ─round─┐
//!                               prior ─→ T·prior ─round─┼─→ posterior ─round─→ Σ = 1? ─→ argmax
//!                                  ↑                                                │
//!                                  └──────────────── new prior ─────────────────────┘
//! ```
//!
//! Every stage is rounded to the configured decimal places where it is
//! produced. A step that fails (dimensions, NaN or -inf readings, degenerate
//! evidence, broken normalization) leaves the belief exactly as it was.
//!
//! ## Usage Example
//!
//! ```rust
//! use bayes_intent_core::Estimator;
//!
//! // Three goals, angle + path length per goal
//! let mut estimator = Estimator::<3, 2>::new([180.0, 25.0], [0.6, 0.4], 0.2)?;
//!
//! // Goal 0 is dead ahead and close, goal 2 is behind and far
//! let goal = estimator.update(&[0.0, 1.0, 90.0, 12.0, 180.0, 25.0])?;
//! assert_eq!(goal, 0);
//! assert_eq!(estimator.belief(), &[0.86, 0.12, 0.02]);
//! # Ok::<(), bayes_intent_core::EstimatorError>(())
//! ```

use crate::{
    config::EstimatorConfig,
    constants::{MIN_HIDDEN_STATES, MIN_SOURCES, NORMALIZATION_TOLERANCE},
    errors::{EstimatorError, EstimatorResult},
    estimation::{
        models::{arg_max, posterior_belief, ObservationModel, TransitionModel},
        precision::Precision,
    },
    traits::RecursiveEstimator,
};

/// Rounded intermediate quantities of one update step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport<const N: usize> {
    /// 1-based index of the step
    pub step: u64,
    /// Rounded raw likelihood per hidden state
    pub likelihood: [f64; N],
    /// Rounded transition term computed from the previous belief
    pub transition: [f64; N],
    /// Rounded normalized posterior, now the belief
    pub posterior: [f64; N],
    /// Most probable hidden state (0-based)
    pub estimate: usize,
}

impl<const N: usize> StepReport<N> {
    /// Posterior probability of the chosen state
    pub fn confidence(&self) -> f64 {
        self.posterior[self.estimate]
    }
}

/// Discrete recursive Bayesian estimator
///
/// ## Type Parameters
/// - `N`: number of hidden states (at least 2)
/// - `M`: number of observation sources per hidden state (at least 1)
///
/// Updates take `&mut self`, so one instance is never updated concurrently.
/// Independent instances share nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimator<const N: usize, const M: usize> {
    /// Current belief (prior for the next step)
    belief: [f64; N],
    /// Exponential product-of-experts evidence model
    observation: ObservationModel<N, M>,
    /// Sticky transition table, fixed after construction
    transition: TransitionModel<N>,
    /// Rounding applied after every stage
    precision: Precision,
    /// Successful updates since construction or reset
    steps: u64,
}

impl<const N: usize, const M: usize> Estimator<N, M> {
    /// Create estimator with uniform belief and 2-decimal rounding
    ///
    /// Fails with `InvalidParameter` unless `N >= 2`, `M >= 1`, every
    /// normalization value and weight is positive and finite, and `delta`
    /// lies in `[0, 1]`. Values strictly inside `(0, 1)` are the useful
    /// range; the endpoints give the identity and full-leak matrices.
    pub fn new(normalization: [f64; M], weights: [f64; M], delta: f64) -> EstimatorResult<Self> {
        if N < MIN_HIDDEN_STATES {
            return Err(EstimatorError::InvalidParameter {
                reason: "at least two hidden states are required",
            });
        }
        if M < MIN_SOURCES {
            return Err(EstimatorError::InvalidParameter {
                reason: "at least one observation source is required",
            });
        }
        if !normalization.iter().all(|v| v.is_finite() && *v > 0.0) {
            return Err(EstimatorError::InvalidParameter {
                reason: "normalization values must be positive and finite",
            });
        }
        if !weights.iter().all(|w| w.is_finite() && *w > 0.0) {
            return Err(EstimatorError::InvalidParameter {
                reason: "weights must be positive and finite",
            });
        }
        if !(0.0..=1.0).contains(&delta) {
            return Err(EstimatorError::InvalidParameter {
                reason: "delta must lie in [0, 1]",
            });
        }

        Ok(Self {
            belief: Self::uniform(),
            observation: ObservationModel::new(normalization, weights),
            transition: TransitionModel::new(delta),
            precision: Precision::default(),
            steps: 0,
        })
    }

    /// Create estimator from slices, checking both have length `M`
    pub fn from_slices(normalization: &[f64], weights: &[f64], delta: f64) -> EstimatorResult<Self> {
        if normalization.len() != M {
            return Err(EstimatorError::DimensionMismatch {
                expected: M,
                actual: normalization.len(),
                context: "normalization",
            });
        }
        if weights.len() != M {
            return Err(EstimatorError::DimensionMismatch {
                expected: M,
                actual: weights.len(),
                context: "weights",
            });
        }

        let mut norm = [0.0; M];
        norm.copy_from_slice(normalization);
        let mut w = [0.0; M];
        w.copy_from_slice(weights);
        Self::new(norm, w, delta)
    }

    /// Create estimator from a configuration whose dimensions match `N` and `M`
    pub fn from_config(config: &EstimatorConfig) -> EstimatorResult<Self> {
        if config.hidden_states != N {
            return Err(EstimatorError::DimensionMismatch {
                expected: N,
                actual: config.hidden_states,
                context: "hidden states",
            });
        }
        if config.sources != M {
            return Err(EstimatorError::DimensionMismatch {
                expected: M,
                actual: config.sources,
                context: "observation sources",
            });
        }
        config.validate()?;

        Self::from_slices(&config.normalization, &config.weights, config.delta)?
            .with_decimal_places(config.decimal_places)
    }

    /// Override rounding precision
    ///
    /// Fails with `InvalidParameter` above `MAX_DECIMAL_PLACES`.
    pub fn with_decimal_places(mut self, decimal_places: u8) -> EstimatorResult<Self> {
        self.precision = Precision::new(decimal_places)?;
        Ok(self)
    }

    fn uniform() -> [f64; N] {
        [1.0 / N as f64; N]
    }

    /// Current belief over hidden states
    pub fn belief(&self) -> &[f64; N] {
        &self.belief
    }

    /// Transition matrix, `matrix[x][x'] = Pr(x | x')`
    pub fn transition_matrix(&self) -> &[[f64; N]; N] {
        self.transition.matrix()
    }

    /// Per-source normalization values
    pub fn normalization(&self) -> &[f64; M] {
        self.observation.normalization()
    }

    /// Per-source decay weights
    pub fn weights(&self) -> &[f64; M] {
        self.observation.weights()
    }

    /// Transition leak parameter
    pub fn delta(&self) -> f64 {
        self.transition.delta()
    }

    /// Rounding precision in decimal places
    pub fn decimal_places(&self) -> u8 {
        self.precision.decimal_places()
    }

    /// Successful updates since construction or the last reset
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Raw likelihood per hidden state for an `N * M` batch (unrounded)
    pub fn observation_model(&self, observations: &[f64]) -> EstimatorResult<[f64; N]> {
        self.check_observations(observations)?;
        Ok(self.observation.likelihood(observations))
    }

    /// Transition term from the rounded current belief (unrounded)
    pub fn transition_model(&self) -> [f64; N] {
        let prior = self.precision.round_all(self.belief);
        self.transition.propagate(&prior)
    }

    /// Run one update step and return the most probable hidden state
    pub fn update(&mut self, observations: &[f64]) -> EstimatorResult<usize> {
        self.step(observations).map(|report| report.estimate)
    }

    /// Run one update step and return every rounded intermediate
    pub fn step(&mut self, observations: &[f64]) -> EstimatorResult<StepReport<N>> {
        self.check_observations(observations)?;

        let likelihood = self.precision.round_all(self.observation.likelihood(observations));
        let transition = self.precision.round_all(self.transition_model());
        let posterior = match posterior_belief(&likelihood, &transition) {
            Ok(posterior) => self.precision.round_all(posterior),
            Err(err) => {
                log_warn!("degenerate evidence: likelihood = {:?}, transition = {:?}", likelihood, transition);
                return Err(err);
            }
        };

        log_debug!("prior = {:?}", self.precision.round_all(self.belief));
        let estimate = self.maximum_and_recursion(posterior)?;
        log_debug!(
            "likelihood = {:?}, transition = {:?}, posterior = {:?}, estimate = {}",
            likelihood, transition, posterior, estimate
        );

        Ok(StepReport {
            step: self.steps,
            likelihood,
            transition,
            posterior,
            estimate,
        })
    }

    /// Return belief to uniform and the step counter to zero
    pub fn reset(&mut self) {
        self.belief = Self::uniform();
        self.steps = 0;
    }

    fn check_observations(&self, observations: &[f64]) -> EstimatorResult<()> {
        if observations.len() != N * M {
            return Err(EstimatorError::DimensionMismatch {
                expected: N * M,
                actual: observations.len(),
                context: "observations",
            });
        }
        // +inf is a legal reading with zero evidence, exp(-inf) = 0
        match observations.iter().position(|v| v.is_nan() || *v == f64::NEG_INFINITY) {
            Some(index) => Err(EstimatorError::InvalidObservation { index }),
            None => Ok(()),
        }
    }

    /// Check the rounded posterior is a distribution, adopt it, pick the maximum
    fn maximum_and_recursion(&mut self, posterior: [f64; N]) -> EstimatorResult<usize> {
        let sum: f64 = posterior.iter().sum();
        if libm::fabs(sum - 1.0) > NORMALIZATION_TOLERANCE {
            log_warn!(
                "rounded posterior {:?} sums to {}; {} decimal places too coarse",
                posterior, sum, self.precision.decimal_places()
            );
            return Err(EstimatorError::NormalizationInvariantViolation { sum });
        }

        self.belief = posterior;
        self.steps += 1;
        Ok(arg_max(&self.belief))
    }
}

impl<const N: usize, const M: usize> RecursiveEstimator<N> for Estimator<N, M> {
    fn update(&mut self, observations: &[f64]) -> EstimatorResult<usize> {
        Estimator::update(self, observations)
    }

    fn belief(&self) -> &[f64; N] {
        Estimator::belief(self)
    }

    fn reset(&mut self) {
        Estimator::reset(self)
    }

    fn steps(&self) -> u64 {
        Estimator::steps(self)
    }
}
