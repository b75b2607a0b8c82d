//! Policy constants used by the analysis pipeline.
//!
//! None of these values are derived from the data; they are conventions of
//! introductory descriptive statistics. They are grouped here so a caller can
//! tune them (for example from a JSON file) without touching the algorithms.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Tunable thresholds and multipliers.
///
/// Deserialization fills every missing field from [`PolicyConfig::default`],
/// so a configuration file only needs to list the values it overrides.
///
/// # Examples
///
/// ```
/// use freqdist_stats::config::PolicyConfig;
///
/// let config: PolicyConfig = serde_json::from_str(r#"{ "max_bins": 20 }"#).unwrap();
/// assert_eq!(config.max_bins, 20);
/// assert_eq!(config.discrete_threshold, 15);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Numeric data with fewer distinct values than this is discrete.
    pub discrete_threshold: usize,
    /// Coefficient of `log10(n)` in Sturges' rule.
    pub sturges_coefficient: f64,
    /// Smallest bin count accepted from the caller.
    pub min_bins: usize,
    /// Largest bin count accepted from the caller.
    pub max_bins: usize,
    /// Bin count used when Sturges' rule yields nothing usable.
    pub default_bins: usize,
    /// IQR multiplier for Tukey fences.
    pub tukey_multiplier: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            discrete_threshold: 15,
            sturges_coefficient: 3.322,
            min_bins: 2,
            max_bins: 30,
            default_bins: 5,
            tukey_multiplier: 1.5,
        }
    }
}

impl PolicyConfig {
    /// Checks that the configuration is internally consistent.
    ///
    /// # Examples
    ///
    /// ```
    /// use freqdist_stats::config::PolicyConfig;
    ///
    /// assert!(PolicyConfig::default().validate().is_ok());
    ///
    /// let config = PolicyConfig { min_bins: 10, max_bins: 5, ..PolicyConfig::default() };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let reason = if self.discrete_threshold == 0 {
            "discrete_threshold must be positive"
        } else if !(self.sturges_coefficient.is_finite() && self.sturges_coefficient > 0.0) {
            "sturges_coefficient must be a positive number"
        } else if self.min_bins == 0 {
            "min_bins must be at least 1"
        } else if self.min_bins > self.max_bins {
            "min_bins must not exceed max_bins"
        } else if self.default_bins == 0 {
            "default_bins must be at least 1"
        } else if !(self.tukey_multiplier.is_finite() && self.tukey_multiplier >= 0.0) {
            "tukey_multiplier must be a non-negative number"
        } else {
            return Ok(());
        };
        Err(AnalysisError::InvalidConfig {
            reason: reason.to_owned(),
        })
    }

    /// Returns `Ok(bins)` when `bins` lies within `[min_bins, max_bins]`.
    pub fn check_bin_count(&self, bins: usize) -> Result<usize, AnalysisError> {
        if (self.min_bins..=self.max_bins).contains(&bins) {
            Ok(bins)
        } else {
            Err(AnalysisError::InvalidBinCount {
                bins,
                min: self.min_bins,
                max: self.max_bins,
            })
        }
    }
}
