//! Descriptive statistics for benchmark samples
//!
//! Produces the per-group summary printed in every table: sample size, mean,
//! median, sample standard deviation and a 95% confidence interval whose
//! critical value depends on the sample size.
//!
//! All fields are rounded to two decimals the same way the published
//! reference tables were, so numbers can be compared digit for digit.

/// Decimal places used for every summary field
pub const SUMMARY_DECIMALS: usize = 2;

/// Fixed summary of one numeric sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveSummary {
    /// Number of values in the sample (always >= 1)
    pub n: usize,
    pub mean: f64,
    /// Element at sorted index `n / 2`
    pub median: f64,
    /// Sample standard deviation (Bessel-corrected, 0 when n == 1)
    pub std: f64,
    /// Half-width of the 95% confidence interval
    pub ci_95: f64,
    pub min: f64,
    pub max: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
}

/// Critical value for the 95% CI half-width at sample size `n`
///
/// Fixed approximations of the t quantile, not derived from a distribution:
/// - n >= 30: 1.96 (normal approximation)
/// - 20 <= n < 30: 2.045
/// - 10 <= n < 20: 2.262
/// - n < 10: 2.776
pub fn ci_multiplier(n: usize) -> f64 {
    if n >= 30 {
        1.96
    } else if n >= 20 {
        2.045
    } else if n >= 10 {
        2.262
    } else {
        2.776
    }
}

/// Round to `decimals` places, ties to even on the exact binary value
///
/// Goes through the exact decimal expansion instead of `(x * 100).round()`,
/// which double-rounds values like 1.005.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", decimals, value)
        .parse()
        .unwrap_or(value)
}

/// Compute the descriptive summary of a sample
///
/// Returns `None` for an empty sample.
///
/// # Example
/// ```
/// use dockbench::stats::summarize;
///
/// let summary = summarize(&[100.0, 110.0, 105.0]).unwrap();
/// assert_eq!(summary.n, 3);
/// assert_eq!(summary.mean, 105.0);
/// assert_eq!(summary.median, 105.0);
/// ```
pub fn summarize(values: &[f64]) -> Option<DescriptiveSummary> {
    if values.is_empty() {
        return None;
    }

    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    // Upper-middle element for even n, kept for parity with published tables
    let median = sorted[n / 2];

    let std = if n > 1 {
        let sum_sq: f64 = values.iter().map(|x| (x - mean).powi(2)).sum();
        (sum_sq / (n - 1) as f64).sqrt()
    } else {
        0.0
    };

    let ci_95 = ci_multiplier(n) * std / (n as f64).sqrt();

    let round = |v: f64| round_to(v, SUMMARY_DECIMALS);

    Some(DescriptiveSummary {
        n,
        mean: round(mean),
        median: round(median),
        std: round(std),
        ci_95: round(ci_95),
        min: round(sorted[0]),
        max: round(sorted[n - 1]),
        ci_lower: round(mean - ci_95),
        ci_upper: round(mean + ci_95),
    })
}

/// Percentage change of `subject` relative to `baseline`
///
/// `None` when the baseline mean is not positive.
pub fn overhead_pct(subject_mean: f64, baseline_mean: f64) -> Option<f64> {
    (baseline_mean > 0.0).then(|| (subject_mean - baseline_mean) / baseline_mean * 100.0)
}
