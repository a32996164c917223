//! Offline Weight Calibration for the Observation Model
//!
//! ## Overview
//!
//! The estimator's likelihood for a hypothesis with two observation sources
//! is
//! ```text
//! L(w₁, w₂) = exp(-a / w₁) · exp(-p / w₂)
//! ```
//! where `a` and `p` are the normalized readings. Picking `w₁, w₂` by hand is
//! guesswork; this crate searches the grid of pairs with `w₁ + w₂ = 1`
//! (0.1/0.9, 0.2/0.8, …) for the pair that most often maximizes the rounded
//! likelihood over random synthetic readings.
//!
//! ## Caveat
//!
//! Maximizing the likelihood most of the time does not mean maximizing the
//! posterior, which also depends on the transition model. Treat the result
//! as a starting point for the estimator's weights, not an optimum.
//!
//! ## Usage
//!
//! ```rust
//! use bayes_intent_calibration::{CalibrationConfig, WeightCalibrator};
//!
//! let mut calibrator = WeightCalibrator::new(CalibrationConfig::goal_navigation())?;
//! let report = calibrator.run();
//!
//! for pair in &report.modes {
//!     println!("{:?} won {} of {} draws", pair.weights(), report.occurrences, report.iterations);
//! }
//! # Ok::<(), bayes_intent_calibration::CalibrationError>(())
//! ```

pub mod errors;
pub mod pairs;
pub mod search;

pub use errors::{CalibrationError, CalibrationResult};
pub use pairs::{candidate_pairs, WeightPair};
pub use search::{CalibrationConfig, CalibrationReport, WeightCalibrator};
