//! Common test utilities for estimator integration tests
//!
//! Provides:
//! - Assertion helpers for probability vectors
//! - A deterministic RNG for synthetic readings
//! - Goal-approach scenarios for the three-goal navigation preset

#![allow(dead_code)]

pub mod scenarios;

#[macro_export]
macro_rules! assert_within_tolerance {
    ($actual:expr, $expected:expr, $tolerance:expr) => {
        let diff = ($actual - $expected).abs();
        if diff > $tolerance {
            panic!(
                "Value {} not within tolerance {} of expected {} (diff: {})",
                $actual, $tolerance, $expected, diff
            );
        }
    };
}

/// Belief must be non-negative and sum to one
#[macro_export]
macro_rules! assert_distribution {
    ($belief:expr) => {
        let belief = $belief;
        for (i, p) in belief.iter().enumerate() {
            if *p < 0.0 {
                panic!("Negative probability {} at index {} in {:?}", p, i, belief);
            }
        }
        let total: f64 = belief.iter().sum();
        assert_within_tolerance!(total, 1.0, 1e-9);
    };
}

/// Deterministic random number generator for tests
pub struct TestRng {
    state: u64,
}

impl TestRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u64(&mut self) -> u64 {
        // Xorshift algorithm
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    pub fn gen_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}
