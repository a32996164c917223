//! Weight Calibration Example
//!
//! Searches the weight pairs `(w₁, w₂)` with `w₁ + w₂ = 1` for the one that
//! most often maximizes the heading-angle / path-length likelihood over
//! random readings, then runs one estimator step with the winner.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_weight_calibration
//! ```

use bayes_intent_calibration::{CalibrationConfig, WeightCalibrator};
use bayes_intent_core::Estimator;

fn main() {
    println!("Observation Weight Calibration Example");
    println!("======================================\n");

    let config = CalibrationConfig::goal_navigation().with_seed(2023);
    let mut calibrator = match WeightCalibrator::new(config) {
        Ok(calibrator) => calibrator,
        Err(e) => {
            eprintln!("Invalid calibration setup: {}", e);
            return;
        }
    };

    println!("Candidates: {}", calibrator.candidates().len());
    let report = calibrator.run();

    println!("\nTally:");
    for (pair, count) in &report.tally {
        println!("  {} → {}", pair, count);
    }

    let modes: Vec<String> = report.modes.iter().map(|pair| pair.to_string()).collect();
    println!(
        "\nWe get [{}] in a total of {} loops ({:.0}%)",
        modes.join(", "),
        report.occurrences,
        report.share() * 100.0
    );
    println!("{}", if report.confident { " OK " } else { "not sure about the yielding pair" });

    let weights = report.modes[0].weights();
    match Estimator::<3, 2>::new([180.0, 25.0], weights, 0.2) {
        Ok(mut estimator) => match estimator.update(&[10.0, 3.0, 100.0, 15.0, 170.0, 24.0]) {
            Ok(goal) => println!("\nWith weights {:?} the estimator picks goal {}", weights, goal + 1),
            Err(e) => println!("\nEstimator step rejected: {}", e),
        },
        Err(e) => eprintln!("Winning weights rejected: {}", e),
    }
}
