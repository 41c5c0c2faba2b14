// Significance backends
//
// Comparisons go through `SignificanceBackend` so the rest of the pipeline
// does not care whether rank-sum testing is compiled in. An unavailable
// backend and an undersized sample both produce `None`.

use super::config::SignificanceConfig;
use super::effect::EffectSize;

#[cfg(feature = "significance")]
use super::effect::cliffs_delta;
#[cfg(feature = "significance")]
use super::mann_whitney::mann_whitney_u;
#[cfg(feature = "significance")]
use crate::stats::round_to;

/// Outcome of comparing two samples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignificanceResult {
    /// U statistic of the first group, 2 decimals
    pub u_statistic: f64,
    /// Two-sided p-value, 6 decimals
    pub p_value: f64,
    /// `p_value < significance_level` (evaluated before rounding)
    pub significant: bool,
    /// Cliff's delta in [-1, 1], 3 decimals
    pub cliffs_delta: f64,
    /// Label of the unrounded delta
    pub effect_size: EffectSize,
}

/// A strategy for two-sample significance testing
pub trait SignificanceBackend {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Whether this backend can ever produce a result
    fn is_available(&self) -> bool {
        true
    }

    /// Compare two samples; `None` means "not applicable"
    fn compare(&self, group_a: &[f64], group_b: &[f64]) -> Option<SignificanceResult>;
}

/// Mann-Whitney U with Cliff's delta
#[cfg(feature = "significance")]
#[derive(Debug, Clone, Default)]
pub struct RankSumBackend {
    config: SignificanceConfig,
}

#[cfg(feature = "significance")]
impl RankSumBackend {
    pub fn new(config: SignificanceConfig) -> Self {
        Self { config }
    }
}

#[cfg(feature = "significance")]
impl SignificanceBackend for RankSumBackend {
    fn name(&self) -> &'static str {
        "mann-whitney"
    }

    fn compare(&self, group_a: &[f64], group_b: &[f64]) -> Option<SignificanceResult> {
        let min = self.config.min_sample_size;
        if group_a.len() < min || group_b.len() < min {
            tracing::debug!(
                n1 = group_a.len(),
                n2 = group_b.len(),
                min,
                "sample too small for significance test"
            );
            return None;
        }

        let test = mann_whitney_u(group_a, group_b)?;
        let delta = cliffs_delta(test.u1, group_a.len(), group_b.len());

        tracing::debug!(
            u1 = test.u1,
            p = test.p_value,
            method = ?test.method,
            delta,
            "mann-whitney comparison"
        );

        Some(SignificanceResult {
            u_statistic: round_to(test.u1, 2),
            p_value: round_to(test.p_value, 6),
            significant: test.p_value < self.config.significance_level,
            cliffs_delta: round_to(delta, 3),
            effect_size: EffectSize::from_delta(delta),
        })
    }
}

/// Backend used when significance testing is disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableBackend;

impl SignificanceBackend for UnavailableBackend {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn compare(&self, _group_a: &[f64], _group_b: &[f64]) -> Option<SignificanceResult> {
        None
    }
}

/// Best backend compiled into this build
#[cfg(feature = "significance")]
pub fn default_backend(config: SignificanceConfig) -> Box<dyn SignificanceBackend> {
    Box::new(RankSumBackend::new(config))
}

/// Best backend compiled into this build
#[cfg(not(feature = "significance"))]
pub fn default_backend(_config: SignificanceConfig) -> Box<dyn SignificanceBackend> {
    Box::new(UnavailableBackend)
}

/// Default backend when `enabled`, otherwise the unavailable one
pub fn select_backend(enabled: bool, config: SignificanceConfig) -> Box<dyn SignificanceBackend> {
    if enabled {
        default_backend(config)
    } else {
        Box::new(UnavailableBackend)
    }
}
