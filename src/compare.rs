//! Cross-platform comparison of one benchmark group
//!
//! Each results directory is one platform. The configured group (by default
//! warm alpine starts) is summarized per platform and every pair of
//! platforms is tested for a significant difference.

use crate::analysis::{load_test_samples, platform_name};
use crate::dataset::{evaluate_group, GroupOutcome};
use crate::error::{AnalysisError, Result};
use crate::schema::{BenchmarkTest, ComparisonSpec, Registry};
use crate::significance::{SignificanceBackend, SignificanceResult};
use crate::stats::DescriptiveSummary;
use std::path::PathBuf;

/// The compared group's sample on one platform
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformSample {
    pub platform: String,
    pub values: Vec<f64>,
    pub summary: DescriptiveSummary,
}

/// A platform left out of the comparison, and why
#[derive(Debug, Clone, PartialEq)]
pub struct Exclusion {
    pub platform: String,
    pub reason: String,
}

/// Significance test between two platforms
#[derive(Debug, Clone, PartialEq)]
pub struct PairComparison {
    pub first: String,
    pub second: String,
    pub result: SignificanceResult,
}

#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub test: BenchmarkTest,
    pub group_label: String,
    /// Sorted by platform name
    pub platforms: Vec<PlatformSample>,
    pub excluded: Vec<Exclusion>,
    pub pairs: Vec<PairComparison>,
    /// False when the backend can never produce results
    pub significance_available: bool,
}

impl ComparisonReport {
    /// A comparison needs data from at least two platforms
    pub fn has_enough_platforms(&self) -> bool {
        self.platforms.len() >= 2
    }
}

/// Gather the compared group from every directory
pub fn collect_platform_samples(
    dirs: &[PathBuf],
    test: &BenchmarkTest,
    group: &[String],
) -> (Vec<PlatformSample>, Vec<Exclusion>) {
    let mut platforms = Vec::new();
    let mut excluded = Vec::new();

    for dir in dirs {
        let platform = platform_name(dir);
        let exclude = |reason: String| Exclusion {
            platform: platform.clone(),
            reason,
        };

        let samples = match load_test_samples(dir, test) {
            Ok(samples) => samples,
            Err(err) => {
                excluded.push(exclude(err.to_string()));
                continue;
            }
        };

        let Some(values) = samples.get(group) else {
            excluded.push(exclude(format!(
                "no '{}' samples",
                test.group_label(group)
            )));
            continue;
        };

        match evaluate_group(values) {
            Some(GroupOutcome::Summary(summary)) => platforms.push(PlatformSample {
                platform: platform.clone(),
                values: values.clone(),
                summary,
            }),
            Some(GroupOutcome::SuspectZero { n }) => {
                tracing::warn!(%platform, n, "compared group is all zeros");
                excluded.push(exclude(format!(
                    "all {} values are zero (suspect collection)",
                    n
                )));
            }
            None => excluded.push(exclude("empty sample".to_string())),
        }
    }

    platforms.sort_by(|a, b| a.platform.cmp(&b.platform));
    (platforms, excluded)
}

/// Test every pair of platforms (i < j in sorted order)
///
/// Pairs the backend reports as not applicable are left out.
pub fn significance_sweep(
    platforms: &[PlatformSample],
    backend: &dyn SignificanceBackend,
) -> Vec<PairComparison> {
    let mut pairs = Vec::new();

    for (i, first) in platforms.iter().enumerate() {
        for second in &platforms[i + 1..] {
            if let Some(result) = backend.compare(&first.values, &second.values) {
                pairs.push(PairComparison {
                    first: first.platform.clone(),
                    second: second.platform.clone(),
                    result,
                });
            }
        }
    }

    pairs
}

/// Compare the configured group across results directories
pub fn compare_platforms(
    dirs: &[PathBuf],
    registry: &Registry,
    spec: &ComparisonSpec,
    backend: &dyn SignificanceBackend,
) -> Result<ComparisonReport> {
    registry.check_comparison(spec)?;
    let test = registry.get(&spec.test).ok_or_else(|| {
        AnalysisError::InvalidRegistry(format!("comparison test '{}' is not defined", spec.test))
    })?;

    let (platforms, excluded) = collect_platform_samples(dirs, test, &spec.group);

    let pairs = if platforms.len() >= 2 {
        significance_sweep(&platforms, backend)
    } else {
        Vec::new()
    };

    tracing::debug!(
        platforms = platforms.len(),
        excluded = excluded.len(),
        pairs = pairs.len(),
        backend = backend.name(),
        "cross-platform comparison"
    );

    Ok(ComparisonReport {
        test: test.clone(),
        group_label: test.group_label(&spec.group),
        platforms,
        excluded,
        pairs,
        significance_available: backend.is_available(),
    })
}
