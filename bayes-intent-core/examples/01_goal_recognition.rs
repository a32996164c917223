//! Goal Recognition Example
//!
//! This example shows how the recursive estimator infers which of three
//! goals a remotely operated robot is heading toward.
//!
//! ## What You'll Learn
//!
//! - Laying out an observation batch (one group of readings per goal)
//! - Reading the rounded intermediates of each step
//! - Handling steps the estimator rejects
//!
//! ## Observation Layout
//!
//! With 3 goals and 2 sources (heading angle, path length) a batch holds 6
//! readings: `[angle₀, path₀, angle₁, path₁, angle₂, path₂]`.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_goal_recognition
//! ```

use bayes_intent_core::{
    constants::presets::{ANGLE_RANGE, PATH_RANGE},
    Estimator, EstimatorConfig, EstimatorError,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const EPISODES: usize = 8;

fn main() {
    println!("Recursive Bayesian Goal Recognition Example");
    println!("===========================================\n");

    let config = EstimatorConfig::goal_navigation();
    println!("Goals: {}, sources per goal: {}", config.hidden_states, config.sources);
    println!("Normalization: {:?}", config.normalization.as_slice());
    println!("Weights: {:?}", config.weights.as_slice());
    println!("Delta: {}\n", config.delta);

    let mut estimator = match Estimator::<3, 2>::from_config(&config) {
        Ok(estimator) => estimator,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return;
        }
    };

    let mut rng = StdRng::seed_from_u64(2021);

    for episode in 1..=EPISODES {
        println!("Iteration {}", episode);

        let mut batch = [0.0; 6];
        for goal in batch.chunks_exact_mut(2) {
            goal[0] = rng.gen_range(ANGLE_RANGE.0..=ANGLE_RANGE.1) as f64;
            goal[1] = rng.gen_range(PATH_RANGE.0..=PATH_RANGE.1) as f64;
        }
        println!("  observations = {:?}", batch);

        match estimator.step(&batch) {
            Ok(report) => {
                println!("  likelihood   = {:?}", report.likelihood);
                println!("  transition   = {:?}", report.transition);
                println!("  posterior    = {:?}", report.posterior);
                println!(
                    "  estimated goal X = {} (p = {:.2})",
                    report.estimate + 1,
                    report.confidence()
                );
            }
            Err(EstimatorError::NormalizationInvariantViolation { sum }) => {
                println!("  ✗ posterior sums to {:.2}; belief kept from previous step", sum);
            }
            Err(e) => {
                println!("  ✗ step rejected: {}", e);
            }
        }
        println!("--------------------");
    }

    println!("\nFinal belief: {:?} after {} accepted steps", estimator.belief(), estimator.steps());
}
