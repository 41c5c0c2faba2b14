//! Benchmark registry: which CSV files exist and how to analyse them
//!
//! Every harness test is described declaratively (file, grouping columns,
//! value column, unit) and analysed by the same generic pipeline. Adding a
//! new test only needs a new `[[test]]` entry.
//!
//! # Example TOML
//! ```toml
//! [comparison]
//! test = "startup"
//! group = ["alpine", "warm"]
//!
//! [[test]]
//! id = "startup"
//! title = "TEST 1: Container Startup Latency"
//! file = "01-startup-latency.csv"
//! group_by = ["image", "mode"]
//! value_column = "startup_ms"
//! unit = "ms"
//! label = "{image} ({mode} start)"
//! ```

use crate::error::{AnalysisError, Result};
use crate::significance::SignificanceConfig;
use crate::value::Transform;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const DEFAULT_REGISTRY: &str = include_str!("../benchmarks-default.toml");

/// Relative comparison between two groups of the same test
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverheadSpec {
    /// Group whose cost is measured (single-column key value)
    pub subject: String,
    /// Group the subject is measured against
    pub baseline: String,
    /// Text printed before the percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl OverheadSpec {
    pub fn display_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("{} overhead vs {}", self.subject, self.baseline))
    }
}

/// One analysed metric of the benchmark harness
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenchmarkTest {
    /// Unique identifier (e.g., "startup")
    pub id: String,

    /// Section heading
    pub title: String,

    /// CSV file name inside a results directory
    pub file: String,

    /// Columns forming the grouping key; empty means one group for the file
    #[serde(default)]
    pub group_by: Vec<String>,

    /// Column holding the measurement
    pub value_column: String,

    /// Unit shown next to values
    #[serde(default)]
    pub unit: String,

    #[serde(default)]
    pub transform: Transform,

    /// Group label template with `{column}` placeholders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overhead: Option<OverheadSpec>,
}

impl BenchmarkTest {
    /// Columns that must be present in the CSV header
    pub fn required_columns(&self) -> impl Iterator<Item = &str> {
        self.group_by
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.value_column.as_str()))
    }

    /// Human-readable label for a group key
    ///
    /// Uses the `label` template when present, otherwise joins the key
    /// values; a test without grouping columns falls back to its title.
    pub fn group_label(&self, key: &[String]) -> String {
        if let Some(template) = &self.label {
            return self
                .group_by
                .iter()
                .zip(key)
                .fold(template.clone(), |label, (column, value)| {
                    label.replace(&format!("{{{}}}", column), value)
                });
        }

        if key.is_empty() {
            self.title.clone()
        } else {
            key.join(" / ")
        }
    }
}

/// Group compared across platforms in `--compare` mode
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ComparisonSpec {
    /// Test id
    pub test: String,
    /// Key values, one per grouping column of the test
    pub group: Vec<String>,
}

impl Default for ComparisonSpec {
    fn default() -> Self {
        Self {
            test: "startup".to_string(),
            group: vec!["alpine".to_string(), "warm".to_string()],
        }
    }
}

/// Full registry file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Registry {
    #[serde(default)]
    pub comparison: ComparisonSpec,

    #[serde(default)]
    pub significance: SignificanceConfig,

    #[serde(rename = "test")]
    pub tests: Vec<BenchmarkTest>,
}

impl Registry {
    /// Registry compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(DEFAULT_REGISTRY)
    }

    /// Load a registry from a TOML file
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| AnalysisError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a registry
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let registry: Registry = toml::from_str(content)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Look up a test by id
    pub fn get(&self, id: &str) -> Option<&BenchmarkTest> {
        self.tests.iter().find(|t| t.id == id)
    }

    /// Check ids are unique and the comparison target exists
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(AnalysisError::InvalidRegistry(msg));

        if self.tests.is_empty() {
            return invalid("no [[test]] entries".to_string());
        }

        let mut seen = HashSet::new();
        for test in &self.tests {
            if !seen.insert(test.id.as_str()) {
                return invalid(format!("duplicate test id '{}'", test.id));
            }
            if test.value_column.is_empty() {
                return invalid(format!("test '{}' has an empty value_column", test.id));
            }
            if let Some(overhead) = &test.overhead {
                if test.group_by.len() != 1 {
                    return invalid(format!(
                        "test '{}' declares an overhead but is not grouped by exactly one column",
                        test.id
                    ));
                }
                if overhead.subject == overhead.baseline {
                    return invalid(format!(
                        "test '{}' compares '{}' with itself",
                        test.id, overhead.subject
                    ));
                }
            }
        }

        self.check_comparison(&self.comparison)?;

        self.significance
            .validate()
            .map_err(AnalysisError::InvalidRegistry)
    }

    /// Check that a comparison target names a known test with a matching key
    pub fn check_comparison(&self, spec: &ComparisonSpec) -> Result<()> {
        let Some(test) = self.get(&spec.test) else {
            return Err(AnalysisError::InvalidRegistry(format!(
                "comparison test '{}' is not defined",
                spec.test
            )));
        };

        if test.group_by.len() != spec.group.len() {
            return Err(AnalysisError::InvalidRegistry(format!(
                "comparison group has {} value(s) but test '{}' groups by {} column(s)",
                spec.group.len(),
                test.id,
                test.group_by.len()
            )));
        }

        Ok(())
    }
}
