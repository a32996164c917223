//! Goal-approach scenarios
//!
//! A robot drives toward one of three goals. For the goal it is heading to,
//! heading angle and remaining path shrink over time; the other goals stay
//! off to the side and far away.

use super::TestRng;

/// Readings per step: (angle, path) for goals 0, 1, 2
pub type GoalBatch = [f64; 6];

/// Robot approaching `target` over `steps` time steps
pub struct GoalApproach {
    pub target: usize,
    pub steps: usize,
    pub noise_deg: f64,
    rng: TestRng,
}

impl GoalApproach {
    pub fn new(target: usize, steps: usize, seed: u64) -> Self {
        Self {
            target,
            steps,
            noise_deg: 5.0,
            rng: TestRng::new(seed),
        }
    }

    /// Observation batches for the whole approach
    pub fn batches(&mut self) -> Vec<GoalBatch> {
        let mut batches = Vec::with_capacity(self.steps);
        for t in 0..self.steps {
            let remaining = 1.0 - t as f64 / self.steps as f64;
            let mut batch = [0.0; 6];
            for goal in 0..3 {
                let (angle, path) = if goal == self.target {
                    (
                        self.rng.gen_range(0.0, self.noise_deg),
                        1.0 + 4.0 * remaining,
                    )
                } else {
                    (
                        self.rng.gen_range(120.0, 180.0),
                        self.rng.gen_range(18.0, 25.0),
                    )
                };
                batch[2 * goal] = angle;
                batch[2 * goal + 1] = path;
            }
            batches.push(batch);
        }
        batches
    }
}
