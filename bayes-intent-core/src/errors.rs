//! Error Types for Recursive Estimation Failures
//!
//! ## Design Philosophy
//!
//! Estimation errors follow the same rules as the rest of the crate:
//!
//! 1. **No Heap Allocation**: Context is carried as `&'static str`, never `String`.
//! 2. **Copy Semantics**: Errors are returned from the update hot path and are cheap
//!    to copy into caller-side queues.
//! 3. **Fail Fast**: Every error is raised before the belief is touched, so a failed
//!    update never leaves the estimator half-advanced.
//!
//! ## Error Categories
//!
//! ### Caller Configuration
//! - `DimensionMismatch`: observation batch or model vectors have the wrong length
//! - `InvalidParameter`: construction parameters outside their domain
//! - `ConfigParse`: a JSON configuration could not be read
//!
//! ### Input Data
//! - `InvalidObservation`: a reading is NaN or negative infinity
//!
//! ### Numerical
//! - `NormalizationInvariantViolation`: the rounded posterior no longer sums to one,
//!   the rounding precision is too coarse for the parameter regime
//! - `DegenerateLikelihood`: every hypothesis got zero evidence, the posterior
//!   cannot be normalized
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use bayes_intent_core::{Estimator, EstimatorError};
//!
//! let mut estimator = Estimator::<2, 1>::new([1.0], [1.0], 0.2).unwrap();
//!
//! match estimator.update(&[0.0, 10.0]) {
//!     Ok(goal) => assert_eq!(goal, 0),
//!     Err(EstimatorError::DimensionMismatch { .. }) => {
//!         // Caller arranged the batch wrongly - fix the driver
//!     }
//!     Err(EstimatorError::NormalizationInvariantViolation { .. }) => {
//!         // Raise the decimal places for this parameter regime
//!     }
//!     Err(_) => {
//!         // Bad readings or degenerate evidence - skip this step
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for estimation operations
pub type EstimatorResult<T> = Result<T, EstimatorError>;

/// Estimation errors - kept small and `Copy` for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EstimatorError {
    /// A vector does not have the length implied by the model dimensions
    #[error("Dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Length required by `N`, `M` or `N * M`
        expected: usize,
        /// Length actually supplied
        actual: usize,
        /// Which vector was wrong
        context: &'static str,
    },

    /// Rounded posterior does not sum to one
    #[error("Posterior sums to {sum} after rounding; decimal places too coarse")]
    NormalizationInvariantViolation {
        /// Sum of the rounded posterior
        sum: f64,
    },

    /// Product of likelihood and transition term is zero for every state
    #[error("Likelihood is zero for every hidden state; posterior undefined")]
    DegenerateLikelihood,

    /// Reading is NaN or negative infinity
    #[error("Observation {index} is NaN or negative infinity")]
    InvalidObservation {
        /// Position of the offending reading in the flat batch
        index: usize,
    },

    /// Construction parameter outside its domain
    #[error("Invalid parameter: {reason}")]
    InvalidParameter {
        /// Which parameter was rejected and why
        reason: &'static str,
    },

    /// Configuration text could not be deserialized
    #[error("Configuration parse failed: {reason}")]
    ConfigParse {
        /// Category of the deserialization failure
        reason: &'static str,
    },
}

impl EstimatorError {
    /// True for errors caused by the caller's setup rather than the data
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::DimensionMismatch { .. } | Self::InvalidParameter { .. } | Self::ConfigParse { .. }
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EstimatorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::DimensionMismatch { expected, actual, context } =>
                defmt::write!(fmt, "{}: expected {}, got {}", context, expected, actual),
            Self::NormalizationInvariantViolation { sum } =>
                defmt::write!(fmt, "Posterior sums to {}", sum),
            Self::DegenerateLikelihood =>
                defmt::write!(fmt, "Degenerate likelihood"),
            Self::InvalidObservation { index } =>
                defmt::write!(fmt, "Observation {} is NaN or -inf", index),
            Self::InvalidParameter { reason } =>
                defmt::write!(fmt, "Invalid parameter: {}", reason),
            Self::ConfigParse { reason } =>
                defmt::write!(fmt, "Config parse: {}", reason),
        }
    }
}
