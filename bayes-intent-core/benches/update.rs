//! Update-step latency for the goal-navigation estimator

use bayes_intent_core::{Estimator, EstimatorConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_update(c: &mut Criterion) {
    let config = EstimatorConfig::goal_navigation();
    let batch = [12.0, 4.0, 95.0, 14.0, 170.0, 22.0];

    c.bench_function("update_3x2", |b| {
        let mut estimator = Estimator::<3, 2>::from_config(&config).unwrap();
        b.iter(|| {
            let _ = estimator.update(black_box(&batch));
        })
    });

    c.bench_function("update_8x4", |b| {
        let mut estimator =
            Estimator::<8, 4>::new([180.0, 25.0, 10.0, 5.0], [0.4, 0.3, 0.2, 0.1], 0.1).unwrap();
        let batch: Vec<f64> = (0..32).map(|i| (i % 7) as f64).collect();
        b.iter(|| {
            let _ = estimator.update(black_box(&batch));
            estimator.reset();
        })
    });
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
