//! Estimator Configuration
//!
//! Runtime description of an estimator's dimensions and model parameters.
//! Under the `std` feature a configuration can be read from JSON:
//!
//! ```rust
//! use bayes_intent_core::{Estimator, EstimatorConfig};
//!
//! let config = EstimatorConfig::from_json(r#"{
//!     "hidden_states": 3,
//!     "sources": 2,
//!     "normalization": [180.0, 25.0],
//!     "weights": [0.6, 0.4],
//!     "delta": 0.2
//! }"#)?;
//!
//! let estimator = Estimator::<3, 2>::from_config(&config)?;
//! assert_eq!(estimator.decimal_places(), 2);
//! # Ok::<(), bayes_intent_core::EstimatorError>(())
//! ```

use heapless::Vec;

use crate::{
    constants::{presets, DEFAULT_DECIMAL_PLACES, MAX_SOURCES},
    errors::{EstimatorError, EstimatorResult},
    estimation::Precision,
};

/// Estimator dimensions and model parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EstimatorConfig {
    /// Number of hidden states `N`
    pub hidden_states: usize,
    /// Number of observation sources `M`
    pub sources: usize,
    /// Scale of each source's raw readings
    pub normalization: Vec<f64, MAX_SOURCES>,
    /// Decay weight of each source
    pub weights: Vec<f64, MAX_SOURCES>,
    /// Transition leak between hidden states
    pub delta: f64,
    /// Rounding applied after every update stage
    #[cfg_attr(feature = "serde", serde(default = "default_decimal_places"))]
    pub decimal_places: u8,
}

#[cfg(feature = "serde")]
fn default_decimal_places() -> u8 {
    DEFAULT_DECIMAL_PLACES
}

impl EstimatorConfig {
    /// Empty configuration; add sources with [`with_source`](Self::with_source)
    pub fn new(hidden_states: usize, delta: f64) -> Self {
        Self {
            hidden_states,
            sources: 0,
            normalization: Vec::new(),
            weights: Vec::new(),
            delta,
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }

    /// Three goals observed through heading angle and path length
    pub fn goal_navigation() -> Self {
        Self::new(presets::GOAL_COUNT, presets::GOAL_DELTA)
            .with_source(presets::MAX_ANGLE_DEG, presets::ANGLE_WEIGHT)
            .with_source(presets::MAX_PATH_M, presets::PATH_WEIGHT)
    }

    /// Append an observation source
    ///
    /// Ignored once `MAX_SOURCES` sources are configured.
    pub fn with_source(mut self, normalization: f64, weight: f64) -> Self {
        if self.sources < MAX_SOURCES
            && self.normalization.push(normalization).is_ok()
            && self.weights.push(weight).is_ok()
        {
            self.sources += 1;
        }
        self
    }

    /// Set transition leak
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    /// Set rounding precision
    pub fn with_decimal_places(mut self, decimal_places: u8) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Check the declared source count against both vectors and the
    /// rounding precision
    ///
    /// Value domains (positive weights, delta range) are checked when the
    /// estimator is built.
    pub fn validate(&self) -> EstimatorResult<()> {
        if self.normalization.len() != self.sources {
            return Err(EstimatorError::DimensionMismatch {
                expected: self.sources,
                actual: self.normalization.len(),
                context: "normalization",
            });
        }
        if self.weights.len() != self.sources {
            return Err(EstimatorError::DimensionMismatch {
                expected: self.sources,
                actual: self.weights.len(),
                context: "weights",
            });
        }
        Precision::new(self.decimal_places)?;
        Ok(())
    }

    /// Observation batch length this configuration expects
    pub fn batch_len(&self) -> usize {
        self.hidden_states * self.sources
    }

    /// Parse and validate a JSON configuration
    #[cfg(feature = "serde_json")]
    pub fn from_json(text: &str) -> EstimatorResult<Self> {
        let config: Self = serde_json::from_str(text).map_err(|_err| {
            log_warn!("estimator configuration rejected: {}", _err);
            EstimatorError::ConfigParse {
                reason: "invalid JSON estimator configuration",
            }
        })?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_navigation_preset() {
        let config = EstimatorConfig::goal_navigation();
        assert_eq!(config.hidden_states, 3);
        assert_eq!(config.sources, 2);
        assert_eq!(config.normalization.as_slice(), &[180.0, 25.0]);
        assert_eq!(config.weights.as_slice(), &[0.6, 0.4]);
        assert_eq!(config.delta, 0.2);
        assert_eq!(config.batch_len(), 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn mismatched_vectors_fail_validation() {
        let mut config = EstimatorConfig::goal_navigation();
        config.weights.pop();
        assert_eq!(
            config.validate(),
            Err(EstimatorError::DimensionMismatch { expected: 2, actual: 1, context: "weights" })
        );

        let mut config = EstimatorConfig::goal_navigation();
        config.sources = 3;
        assert!(matches!(
            config.validate(),
            Err(EstimatorError::DimensionMismatch { context: "normalization", .. })
        ));
    }

    #[test]
    fn sources_are_capped() {
        let mut config = EstimatorConfig::new(2, 0.1);
        for _ in 0..MAX_SOURCES + 3 {
            config = config.with_source(1.0, 0.5);
        }
        assert_eq!(config.sources, MAX_SOURCES);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn too_many_decimal_places() {
        let config = EstimatorConfig::goal_navigation()
            .with_decimal_places(crate::constants::MAX_DECIMAL_PLACES + 1);
        assert!(matches!(config.validate(), Err(EstimatorError::InvalidParameter { .. })));
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_round_trip_defaults_precision() {
        let config = EstimatorConfig::from_json(
            r#"{"hidden_states": 2, "sources": 1, "normalization": [1.0], "weights": [1.0], "delta": 0.2}"#,
        )
        .unwrap();
        assert_eq!(config.decimal_places, DEFAULT_DECIMAL_PLACES);
        assert_eq!(config.batch_len(), 2);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_errors_are_reported() {
        assert!(matches!(
            EstimatorConfig::from_json("{ not json"),
            Err(EstimatorError::ConfigParse { .. })
        ));

        let mismatch = r#"{"hidden_states": 2, "sources": 2, "normalization": [1.0], "weights": [1.0, 2.0], "delta": 0.2}"#;
        assert!(matches!(
            EstimatorConfig::from_json(mismatch),
            Err(EstimatorError::DimensionMismatch { context: "normalization", .. })
        ));
    }
}
