//! Per-directory analysis driven by the benchmark registry

use crate::dataset::{evaluate_group, group_samples, load_table, GroupKey, GroupOutcome, GroupedSamples};
use crate::error::Result;
use crate::schema::{BenchmarkTest, Registry};
use crate::stats::overhead_pct;
use std::path::{Path, PathBuf};

/// One analysed group of a test
#[derive(Debug, Clone, PartialEq)]
pub struct GroupReport {
    pub key: GroupKey,
    pub label: String,
    pub outcome: GroupOutcome,
}

/// Relative cost of one group against another
#[derive(Debug, Clone, PartialEq)]
pub struct OverheadReport {
    pub label: String,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TestOutcome {
    /// The test could not be analysed (missing file, missing column, ...)
    Skipped { reason: String },
    Analyzed {
        groups: Vec<GroupReport>,
        overhead: Option<OverheadReport>,
    },
}

#[derive(Debug, Clone)]
pub struct TestReport<'a> {
    pub test: &'a BenchmarkTest,
    pub outcome: TestOutcome,
}

/// All tests of one results directory
#[derive(Debug, Clone)]
pub struct DirectoryReport<'a> {
    pub dir: PathBuf,
    pub platform: String,
    pub tests: Vec<TestReport<'a>>,
}

impl DirectoryReport<'_> {
    pub fn skipped_count(&self) -> usize {
        self.tests
            .iter()
            .filter(|t| matches!(t.outcome, TestOutcome::Skipped { .. }))
            .count()
    }
}

/// Platform name of a results directory: its last path component
pub fn platform_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}

/// Load and group the samples of one test
pub fn load_test_samples(dir: &Path, test: &BenchmarkTest) -> Result<GroupedSamples> {
    let path = dir.join(&test.file);
    let table = load_table(&path)?;
    table.require_columns(&test.file, test.required_columns())?;

    Ok(group_samples(
        &table.records,
        &test.group_by,
        &test.value_column,
        test.transform,
    ))
}

/// Analyse one test; failures turn into a skip
pub fn analyze_test<'a>(dir: &Path, test: &'a BenchmarkTest) -> TestReport<'a> {
    let samples = match load_test_samples(dir, test) {
        Ok(samples) => samples,
        Err(err) => {
            tracing::debug!(test = %test.id, error = %err, "skipping test");
            return TestReport {
                test,
                outcome: TestOutcome::Skipped {
                    reason: err.to_string(),
                },
            };
        }
    };

    if samples.is_empty() {
        return TestReport {
            test,
            outcome: TestOutcome::Skipped {
                reason: format!("{} has no numeric '{}' values", test.file, test.value_column),
            },
        };
    }

    let groups: Vec<GroupReport> = samples
        .iter()
        .filter_map(|(key, values)| {
            let outcome = evaluate_group(values)?;
            if let GroupOutcome::SuspectZero { n } = outcome {
                tracing::warn!(test = %test.id, group = ?key, n, "all values are zero");
            }
            Some(GroupReport {
                key: key.clone(),
                label: test.group_label(key),
                outcome,
            })
        })
        .collect();

    let overhead = overhead_for(test, &groups);

    TestReport {
        test,
        outcome: TestOutcome::Analyzed { groups, overhead },
    }
}

/// Overhead of the subject group against the baseline group, if both exist
fn overhead_for(test: &BenchmarkTest, groups: &[GroupReport]) -> Option<OverheadReport> {
    let spec = test.overhead.as_ref()?;

    let mean_of = |name: &str| {
        groups
            .iter()
            .find(|g| g.key.len() == 1 && g.key[0] == name)
            .and_then(|g| g.outcome.summary())
            .map(|s| s.mean)
    };

    let percent = overhead_pct(mean_of(&spec.subject)?, mean_of(&spec.baseline)?)?;

    Some(OverheadReport {
        label: spec.display_label(),
        percent,
    })
}

/// Run every registered test against a results directory
pub fn analyze_directory<'a>(dir: &Path, registry: &'a Registry) -> DirectoryReport<'a> {
    let tests = registry
        .tests
        .iter()
        .map(|test| analyze_test(dir, test))
        .collect();

    DirectoryReport {
        dir: dir.to_path_buf(),
        platform: platform_name(dir),
        tests,
    }
}
