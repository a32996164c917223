//! Discrete Recursive Bayesian Estimation
//!
//! ## Overview
//!
//! The estimator tracks which of `N` mutually exclusive hidden states (for
//! example the goal an operator is steering toward) best explains a stream of
//! sensor readings. Each time step it:
//!
//! 1. turns `N × M` raw readings into one evidence score per hidden state
//! 2. predicts the belief forward through a sticky transition model
//! 3. multiplies and normalizes the two into a posterior
//! 4. reports the most probable state and keeps the posterior as next prior
//!
//! ## Memory Model
//!
//! All state is fixed-size and lives inline:
//! ```text
//! Estimator<N, M> size:
//! ├── Belief:           N × 8 bytes
//! ├── Transition:       N × N × 8 bytes
//! ├── Normalization:    M × 8 bytes
//! ├── Weights:          M × 8 bytes
//! └── Total (N=3, M=2): ~160 bytes
//! ```
//!
//! No allocation happens in the update path.

pub mod bayes;
pub mod models;
pub mod precision;

pub use bayes::{Estimator, StepReport};
pub use models::{observation_likelihood, ObservationModel, TransitionModel};
pub use precision::Precision;
