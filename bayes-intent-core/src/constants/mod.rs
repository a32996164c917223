//! Constants for bayes-intent
//!
//! Numeric values used by the estimator and the calibration utility are
//! defined here with their source, so no magic numbers appear in the
//! algorithm code.
//!
//! ## Organization
//!
//! - **Estimation**: rounding, tolerances and model dimension limits
//! - **Calibration**: weight grid and mode-confidence thresholds
//! - **Presets**: parameters of the goal-navigation demonstration

/// Rounding, tolerance and dimension limits for the recursive estimator.
pub mod estimation;

/// Weight-pair search grid and acceptance thresholds.
pub mod calibration;

/// Parameters of the three-goal navigation scenario.
pub mod presets;

pub use estimation::{
    DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES, NORMALIZATION_TOLERANCE,
    MIN_HIDDEN_STATES, MIN_SOURCES, MAX_SOURCES,
};

pub use calibration::{
    WEIGHT_GRID_DENOMINATOR, CONFIDENT_MODE_FRACTION, DEFAULT_CALIBRATION_ITERATIONS,
};
