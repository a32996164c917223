//! Calibration errors

use bayes_intent_core::EstimatorError;
use thiserror::Error;

/// Result type for calibration setup
pub type CalibrationResult<T> = Result<T, CalibrationError>;

/// Reasons a calibration run cannot start
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CalibrationError {
    /// Nothing to tally
    #[error("Calibration needs at least one iteration")]
    ZeroIterations,

    /// Grid has no distinct pair summing to one
    #[error("Weight grid 1/{denominator} has no candidate pairs")]
    EmptyCandidateSet {
        /// Grid denominator that was requested
        denominator: u32,
    },

    /// Reading range with lower bound above upper bound
    #[error("Source {source_index}: range [{min}, {max}] is empty")]
    InvalidRange {
        /// Which of the two sources
        source_index: usize,
        /// Lower bound
        min: i32,
        /// Upper bound
        max: i32,
    },

    /// Normalization value not positive and finite
    #[error("Source {source_index}: normalization {value} must be positive and finite")]
    InvalidNormalization {
        /// Which of the two sources
        source_index: usize,
        /// Offending value
        value: f64,
    },

    /// Parameter rejected by the estimator core (rounding precision)
    #[error(transparent)]
    Core(#[from] EstimatorError),
}
