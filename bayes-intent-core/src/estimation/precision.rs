//! Fixed-precision rounding applied between update stages
//!
//! Every stage of the update (likelihood, transition term, posterior) is
//! rounded to a fixed number of decimal places at the point it is produced.
//! Rounding is cumulative and observable: the decision step checks the
//! *rounded* posterior, and the rounded posterior becomes the next prior.
//!
//! Rounding is half-to-even on the scaled value:
//! ```text
//! round(x, d) = rint(x · 10^d) / 10^d
//! ```
//! so `0.125` rounds to `0.12` and `0.135` to `0.14` (modulo binary
//! representation of the input).

use crate::{
    constants::{DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES},
    errors::{EstimatorError, EstimatorResult},
};

/// Decimal rounding at a fixed number of places
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precision {
    decimal_places: u8,
    scale: f64,
}

impl Default for Precision {
    fn default() -> Self {
        Self::at(DEFAULT_DECIMAL_PLACES)
    }
}

impl Precision {
    /// Create rounding at `decimal_places`
    ///
    /// Fails with `InvalidParameter` above `MAX_DECIMAL_PLACES`, where the
    /// scaled value no longer fits an `f64` mantissa.
    pub fn new(decimal_places: u8) -> EstimatorResult<Self> {
        if decimal_places > MAX_DECIMAL_PLACES {
            return Err(EstimatorError::InvalidParameter {
                reason: "decimal places exceed f64 precision",
            });
        }
        Ok(Self::at(decimal_places))
    }

    fn at(decimal_places: u8) -> Self {
        Self {
            decimal_places,
            scale: libm::pow(10.0, decimal_places as f64),
        }
    }

    /// Configured decimal places
    pub fn decimal_places(&self) -> u8 {
        self.decimal_places
    }

    /// Smallest representable step, `10^-d`
    pub fn quantum(&self) -> f64 {
        1.0 / self.scale
    }

    /// Round a single value
    #[inline]
    pub fn round(&self, value: f64) -> f64 {
        libm::rint(value * self.scale) / self.scale
    }

    /// Round every element, returning the rounded array
    pub fn round_all<const K: usize>(&self, mut values: [f64; K]) -> [f64; K] {
        for value in values.iter_mut() {
            *value = self.round(*value);
        }
        values
    }
}
