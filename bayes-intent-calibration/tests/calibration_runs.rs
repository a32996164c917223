//! Integration tests for the weight-pair search
//!
//! Runs the goal-navigation calibration end to end and feeds the winning
//! weights back into an estimator.

use bayes_intent_calibration::{CalibrationConfig, WeightCalibrator};
use bayes_intent_core::Estimator;
use proptest::prelude::*;

fn run(seed: u64, iterations: usize) -> bayes_intent_calibration::CalibrationReport {
    let config = CalibrationConfig::goal_navigation()
        .with_seed(seed)
        .with_iterations(iterations);
    WeightCalibrator::new(config).unwrap().run()
}

#[test]
fn test_same_seed_same_report() {
    assert_eq!(run(11, 300), run(11, 300));
}

#[test]
fn test_report_is_consistent() {
    let report = run(3, 500);

    assert_eq!(report.iterations, 500);
    assert!(!report.modes.is_empty());
    assert!(report.occurrences >= 1 && report.occurrences <= report.iterations);

    // Every draw credits at least one pair
    let credited: usize = report.tally.iter().map(|(_, count)| *count).sum();
    assert!(credited >= report.iterations);

    for mode in &report.modes {
        let (_, count) = report.tally.iter().find(|(pair, _)| pair == mode).unwrap();
        assert_eq!(*count, report.occurrences);
    }
    assert!(report.tally.iter().all(|(_, count)| *count <= report.occurrences));

    assert_eq!(report.confident, report.occurrences as f64 >= 0.45 * report.iterations as f64);
}

#[test]
fn test_winning_weights_build_an_estimator() {
    let report = run(5, 200);
    let weights = report.modes[0].weights();

    assert!((weights[0] + weights[1] - 1.0).abs() < 1e-12);

    let mut estimator = Estimator::<3, 2>::new([180.0, 25.0], weights, 0.2).unwrap();
    let result = estimator.update(&[0.0, 1.0, 90.0, 12.0, 180.0, 25.0]);
    assert!(!matches!(result, Err(e) if e.is_configuration()));
}

proptest! {
    #[test]
    fn best_pairs_share_the_maximum(a in 0i32..=180, p in 1i32..=25) {
        let calibrator = WeightCalibrator::new(CalibrationConfig::goal_navigation()).unwrap();
        let readings = [a as f64, p as f64];

        let best = calibrator.best_pairs_for(readings);
        prop_assert!(!best.is_empty());

        let top = calibrator.score(&best[0], readings);
        for pair in &best {
            prop_assert_eq!(calibrator.score(pair, readings), top);
        }
        for pair in calibrator.candidates() {
            prop_assert!(calibrator.score(pair, readings) <= top);
        }
    }
}
