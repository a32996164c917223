//! Recursive Bayesian estimation of discrete hidden states
//!
//! Tracks which of a fixed set of mutually exclusive hypotheses (typically
//! the goal a remote operator is steering a robot toward) best explains a
//! stream of sensor readings, updating a belief once per time step.
//!
//! Key constraints:
//! - Fixed-size state through const generics, `no_std` capable
//! - No heap allocation in the update path
//! - Deterministic: identical parameters and inputs give identical output
//!
//! ```no_run
//! use bayes_intent_core::{Estimator, EstimatorConfig};
//!
//! let config = EstimatorConfig::goal_navigation();
//! let mut estimator = Estimator::<3, 2>::from_config(&config).unwrap();
//!
//! // angle, path for each of the three goals
//! match estimator.update(&[12.0, 4.0, 95.0, 14.0, 170.0, 22.0]) {
//!     Ok(goal) => {}, // Operator heading toward `goal`
//!     Err(e) => {},   // Skip this step
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod config;
pub mod constants;
pub mod errors;
pub mod estimation;
pub mod traits;

// Public API
pub use config::EstimatorConfig;
pub use errors::{EstimatorError, EstimatorResult};
pub use estimation::{observation_likelihood, Estimator, Precision, StepReport};
pub use traits::RecursiveEstimator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
