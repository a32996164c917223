//! Calibration Constants
//!
//! Grid and thresholds for the offline weight-pair search.

/// Candidate weights are multiples of `1 / WEIGHT_GRID_DENOMINATOR`.
///
/// Tenths give the grid 0.1, 0.2, ..., 0.9.
pub const WEIGHT_GRID_DENOMINATOR: u32 = 10;

/// Fraction of iterations the modal pair must win to be trusted.
///
/// Below this, the search reports the result as inconclusive.
pub const CONFIDENT_MODE_FRACTION: f64 = 0.45;

/// Random observations drawn per calibration run.
pub const DEFAULT_CALIBRATION_ITERATIONS: usize = 500;
