// Configuration for two-sample significance testing

use serde::{Deserialize, Serialize};

/// Thresholds applied by the significance backends
///
/// # Example
/// ```
/// use dockbench::significance::SignificanceConfig;
///
/// let config = SignificanceConfig::default();
/// assert_eq!(config.significance_level, 0.05);
/// assert_eq!(config.min_sample_size, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignificanceConfig {
    /// A comparison is significant when `p < significance_level`
    pub significance_level: f64,

    /// Both groups need at least this many values, otherwise the comparison
    /// is not applicable
    pub min_sample_size: usize,
}

impl Default for SignificanceConfig {
    fn default() -> Self {
        Self {
            significance_level: 0.05,
            min_sample_size: 5,
        }
    }
}

impl SignificanceConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.significance_level.is_nan()
            || self.significance_level <= 0.0
            || self.significance_level >= 1.0
        {
            return Err(format!(
                "significance_level must be in (0, 1), got {}",
                self.significance_level
            ));
        }

        if self.min_sample_size < 1 {
            return Err(format!(
                "min_sample_size must be >= 1, got {}",
                self.min_sample_size
            ));
        }

        Ok(())
    }
}
