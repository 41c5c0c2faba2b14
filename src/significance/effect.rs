// Cliff's delta effect size and its categorical label

use std::fmt;

/// |delta| below this is negligible
pub const NEGLIGIBLE_BELOW: f64 = 0.147;
/// |delta| below this (and not negligible) is small
pub const SMALL_BELOW: f64 = 0.33;
/// |delta| below this (and not small) is medium
pub const MEDIUM_BELOW: f64 = 0.474;

/// Magnitude class of Cliff's delta (Romano et al. 2006)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EffectSize {
    Negligible,
    Small,
    Medium,
    Large,
}

impl EffectSize {
    /// Classify a delta by its absolute value; each bracket excludes its
    /// upper bound
    pub fn from_delta(delta: f64) -> Self {
        let magnitude = delta.abs();
        if magnitude < NEGLIGIBLE_BELOW {
            Self::Negligible
        } else if magnitude < SMALL_BELOW {
            Self::Small
        } else if magnitude < MEDIUM_BELOW {
            Self::Medium
        } else {
            Self::Large
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Negligible => "negligible",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for EffectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cliff's delta from the first group's U statistic: 2U/(n1 n2) - 1
///
/// Positive when values of the first group tend to be larger.
pub fn cliffs_delta(u1: f64, n1: usize, n2: usize) -> f64 {
    2.0 * u1 / (n1 * n2) as f64 - 1.0
}
