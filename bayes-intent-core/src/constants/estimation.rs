//! Estimation Constants
//!
//! Parameters that shape the numerical behavior of the recursive update.

// ===== ROUNDING =====

/// Decimal places applied after every stage of the update.
///
/// Keeps intermediate quantities stable and human-inspectable. Rounding is
/// part of the published algorithm, so changing it changes results.
///
/// Source: Bayesian intent-recognition model (SMC 2021), 2 decimals
pub const DEFAULT_DECIMAL_PLACES: u8 = 2;

/// Upper bound on configurable decimal places.
///
/// `10^15` is the largest power of ten whose products with unit-range
/// probabilities still have integer precision in an `f64` mantissa.
pub const MAX_DECIMAL_PLACES: u8 = 15;

/// Tolerance for the "posterior sums to one" check.
///
/// Absorbs binary representation error of decimal fractions (0.86 + 0.12 +
/// 0.02 is not exactly 1.0 in `f64`) while staying far below the rounding
/// quantum, so a genuine 0.99 or 1.01 sum is still reported.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-9;

// ===== DIMENSIONS =====

/// At least two hypotheses are needed; the off-diagonal transition mass is
/// `Delta / (N - 1)`.
pub const MIN_HIDDEN_STATES: usize = 2;

/// At least one observation source per hypothesis.
pub const MIN_SOURCES: usize = 1;

/// Capacity of the configuration vectors (`heapless::Vec`).
///
/// Generous for sensor suites on an operator console or mobile robot.
pub const MAX_SOURCES: usize = 16;
