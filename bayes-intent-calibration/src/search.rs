//! Brute-force search for the most frequently winning weight pair
//!
//! ## Algorithm
//!
//! ```text
//! repeat `iterations` times:
//!     draw integer readings (a, p) uniformly from the configured ranges
//!     score every candidate pair: round(L(w₁, w₂), d)
//!     tally every pair that reaches the maximal score (ties all count)
//! report the pair(s) with the highest tally
//! ```
//!
//! The modal pair is trusted when it won at least `CONFIDENT_MODE_FRACTION`
//! of the draws.

use bayes_intent_core::{
    constants::{
        presets, CONFIDENT_MODE_FRACTION, DEFAULT_CALIBRATION_ITERATIONS,
        DEFAULT_DECIMAL_PLACES, WEIGHT_GRID_DENOMINATOR,
    },
    observation_likelihood, Precision,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    errors::{CalibrationError, CalibrationResult},
    pairs::{candidate_pairs, WeightPair},
};

/// Search parameters for two observation sources
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationConfig {
    /// Scale of each source's raw readings
    pub normalization: [f64; 2],
    /// Inclusive range of synthetic integer readings per source
    pub ranges: [(i32, i32); 2],
    /// Number of random draws
    pub iterations: usize,
    /// Seed for reproducible draws
    pub seed: u64,
    /// Rounding applied to each likelihood before comparison
    pub decimal_places: u8,
    /// Weights are multiples of `1 / grid_denominator`
    pub grid_denominator: u32,
}

impl CalibrationConfig {
    /// Heading angle (0..=180°) and path length (1..=25 m)
    pub fn goal_navigation() -> Self {
        Self {
            normalization: [presets::MAX_ANGLE_DEG, presets::MAX_PATH_M],
            ranges: [presets::ANGLE_RANGE, presets::PATH_RANGE],
            iterations: DEFAULT_CALIBRATION_ITERATIONS,
            seed: 0,
            decimal_places: DEFAULT_DECIMAL_PLACES,
            grid_denominator: WEIGHT_GRID_DENOMINATOR,
        }
    }

    /// Set number of draws
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn validate(&self) -> CalibrationResult<()> {
        if self.iterations == 0 {
            return Err(CalibrationError::ZeroIterations);
        }
        for (source_index, (&value, &(min, max))) in
            self.normalization.iter().zip(self.ranges.iter()).enumerate()
        {
            if !(value.is_finite() && value > 0.0) {
                return Err(CalibrationError::InvalidNormalization { source_index, value });
            }
            if min > max {
                return Err(CalibrationError::InvalidRange { source_index, min, max });
            }
        }
        Ok(())
    }
}

/// Outcome of a calibration run
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationReport {
    /// Pair(s) with the highest tally, in first-seen order
    pub modes: Vec<WeightPair>,
    /// Tally of each mode
    pub occurrences: usize,
    /// Draws performed
    pub iterations: usize,
    /// Every pair that won at least once, in first-seen order
    pub tally: Vec<(WeightPair, usize)>,
    /// Modes won at least `CONFIDENT_MODE_FRACTION` of the draws
    pub confident: bool,
}

impl CalibrationReport {
    /// Fraction of draws the modes won
    pub fn share(&self) -> f64 {
        self.occurrences as f64 / self.iterations as f64
    }
}

/// Weight-pair search over random synthetic readings
pub struct WeightCalibrator {
    config: CalibrationConfig,
    candidates: Vec<WeightPair>,
    precision: Precision,
    rng: StdRng,
}

impl WeightCalibrator {
    /// Validate configuration and enumerate candidates
    pub fn new(config: CalibrationConfig) -> CalibrationResult<Self> {
        config.validate()?;

        let candidates = candidate_pairs(config.grid_denominator);
        if candidates.is_empty() {
            return Err(CalibrationError::EmptyCandidateSet {
                denominator: config.grid_denominator,
            });
        }

        Ok(Self {
            precision: Precision::new(config.decimal_places)?,
            rng: StdRng::seed_from_u64(config.seed),
            candidates,
            config,
        })
    }

    /// Candidate pairs under evaluation
    pub fn candidates(&self) -> &[WeightPair] {
        &self.candidates
    }

    /// Rounded likelihood of readings `[a, p]` under `pair`
    pub fn score(&self, pair: &WeightPair, readings: [f64; 2]) -> f64 {
        self.precision
            .round(observation_likelihood(&readings, &self.config.normalization, &pair.weights()))
    }

    /// Every candidate reaching the maximal rounded likelihood for `readings`
    pub fn best_pairs_for(&self, readings: [f64; 2]) -> Vec<WeightPair> {
        let scores: Vec<f64> = self
            .candidates
            .iter()
            .map(|pair| self.score(pair, readings))
            .collect();
        let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        self.candidates
            .iter()
            .zip(scores)
            .filter(|(_, score)| *score == best)
            .map(|(pair, _)| *pair)
            .collect()
    }

    /// Draw one synthetic reading per source
    pub fn sample_readings(&mut self) -> [f64; 2] {
        let [(a_min, a_max), (p_min, p_max)] = self.config.ranges;
        [
            self.rng.gen_range(a_min..=a_max) as f64,
            self.rng.gen_range(p_min..=p_max) as f64,
        ]
    }

    /// Run all draws and report the modal pair(s)
    pub fn run(&mut self) -> CalibrationReport {
        let iterations = self.config.iterations;
        let mut tally: Vec<(WeightPair, usize)> = Vec::new();

        for _ in 0..iterations {
            let readings = self.sample_readings();
            for pair in self.best_pairs_for(readings) {
                match tally.iter_mut().find(|(seen, _)| *seen == pair) {
                    Some((_, count)) => *count += 1,
                    None => tally.push((pair, 1)),
                }
            }
        }

        let occurrences = tally.iter().map(|(_, count)| *count).max().unwrap_or(0);
        let modes: Vec<WeightPair> = tally
            .iter()
            .filter(|(_, count)| *count == occurrences)
            .map(|(pair, _)| *pair)
            .collect();
        let confident = occurrences as f64 >= CONFIDENT_MODE_FRACTION * iterations as f64;

        let shown: Vec<String> = modes.iter().map(|pair| pair.to_string()).collect();
        if confident {
            log::info!("weight calibration: {} won {} of {} draws", shown.join(", "), occurrences, iterations);
        } else {
            log::warn!(
                "weight calibration inconclusive: {} won only {} of {} draws",
                shown.join(", "), occurrences, iterations
            );
        }

        CalibrationReport {
            modes,
            occurrences,
            iterations,
            tally,
            confident,
        }
    }
}
