//! Parameters of the recursive curve fitter.
//!
//! # Example
//!
//! ```rust
//! use fit_curves::FitConfig;
//!
//! let config = FitConfig::new(2.0).with_max_iterations(5);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.acceptance_threshold(), 4.0);
//! assert_eq!(config.refinement_threshold(), 16.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ARC_LENGTH_GRANULARITY, DEFAULT_MAX_ITERATIONS, DEFAULT_STAGNATION_HIGH,
    DEFAULT_STAGNATION_LOW, DEFAULT_TOLERANCE,
};
use crate::error::{BezierError, BezierResult};

/// All fitting parameters in one struct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Maximum allowed distance between an input point and the fitted curve.
    /// This is a linear distance: it is squared once before being compared
    /// against squared point-to-curve distances.
    pub tolerance: f64,
    /// Newton-Raphson rounds tried on a nearly-fitting region before it is split.
    /// 0 disables refinement entirely.
    pub max_iterations: usize,
    /// Number of uniform `t` steps in the arc-length lookup table of the error estimator.
    pub granularity: usize,
    /// Refinement stops when the error ratio between two rounds lies strictly
    /// between `stagnation_low` and `stagnation_high` and the split point did not move.
    pub stagnation_low: f64,
    pub stagnation_high: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            granularity: DEFAULT_ARC_LENGTH_GRANULARITY,
            stagnation_low: DEFAULT_STAGNATION_LOW,
            stagnation_high: DEFAULT_STAGNATION_HIGH,
        }
    }
}

impl FitConfig {
    /// Default configuration with the given tolerance
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_granularity(mut self, granularity: usize) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn with_stagnation_bounds(mut self, low: f64, high: f64) -> Self {
        self.stagnation_low = low;
        self.stagnation_high = high;
        self
    }

    /// Check that the configuration can drive a fit.
    pub fn validate(&self) -> BezierResult<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(BezierError::InvalidTolerance(self.tolerance));
        }
        if self.granularity == 0 {
            return Err(BezierError::InvalidConfig(
                "granularity must be at least 1".to_string(),
            ));
        }
        if !(self.stagnation_low < self.stagnation_high) {
            return Err(BezierError::InvalidConfig(format!(
                "stagnation bounds must satisfy low < high, got ({}, {})",
                self.stagnation_low, self.stagnation_high
            )));
        }
        Ok(())
    }

    /// Squared maximum error below which a segment is accepted.
    pub fn acceptance_threshold(&self) -> f64 {
        self.tolerance * self.tolerance
    }

    /// Squared maximum error below which Newton-Raphson refinement is attempted
    /// instead of splitting right away. This is the square of the acceptance threshold.
    pub fn refinement_threshold(&self) -> f64 {
        let threshold = self.acceptance_threshold();
        threshold * threshold
    }

    /// True when the error ratio between two refinement rounds shows no progress
    pub fn is_stagnant(&self, error_ratio: f64) -> bool {
        error_ratio > self.stagnation_low && error_ratio < self.stagnation_high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = FitConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_iterations, 20);
        assert_eq!(config.granularity, 10);
    }

    #[test]
    fn test_rejects_bad_tolerance() {
        for tolerance in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = FitConfig::new(tolerance).validate();
            assert!(
                matches!(result, Err(BezierError::InvalidTolerance(_))),
                "tolerance {} should be rejected",
                tolerance
            );
        }
    }

    #[test]
    fn test_rejects_zero_granularity_and_inverted_bounds() {
        let result = FitConfig::new(1.0).with_granularity(0).validate();
        assert!(matches!(result, Err(BezierError::InvalidConfig(_))));

        let result = FitConfig::new(1.0)
            .with_stagnation_bounds(1.1, 0.9)
            .validate();
        assert!(matches!(result, Err(BezierError::InvalidConfig(_))));
    }

    #[test]
    fn test_thresholds_follow_tolerance() {
        let config = FitConfig::new(3.0);
        assert_eq!(config.acceptance_threshold(), 9.0);
        assert_eq!(config.refinement_threshold(), 81.0);
        assert!(config.is_stagnant(1.0));
        assert!(!config.is_stagnant(0.9999));
        assert!(!config.is_stagnant(0.5));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: FitConfig = serde_json::from_str(r#"{"tolerance": 4.5}"#).unwrap();
        assert_eq!(config, FitConfig::new(4.5));
    }
}
