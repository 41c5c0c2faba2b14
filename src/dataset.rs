//! Loading harness CSV files and bucketing values by grouping key

use crate::error::{AnalysisError, Result};
use crate::stats::{summarize, DescriptiveSummary};
use crate::value::{parse_value, Transform};
use csv::{ReaderBuilder, Trim};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// One CSV row: column name -> raw cell text
pub type RawRecord = HashMap<String, String>;

/// Values of the grouping columns, in `group_by` order
pub type GroupKey = Vec<String>;

/// Samples per group, ordered by key
pub type GroupedSamples = BTreeMap<GroupKey, Vec<f64>>;

/// A fully read CSV file
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>,
}

impl CsvTable {
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    /// Fail with `MissingColumn` on the first absent column
    pub fn require_columns<'a>(
        &self,
        file: &str,
        columns: impl IntoIterator<Item = &'a str>,
    ) -> Result<()> {
        for column in columns {
            if !self.has_column(column) {
                return Err(AnalysisError::MissingColumn {
                    file: file.to_string(),
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Read a CSV file with a header row
///
/// Short rows are accepted; their missing cells are simply absent from the
/// record. Rows that are not valid UTF-8 are dropped on their own.
pub fn load_table(path: &Path) -> Result<CsvTable> {
    if !path.is_file() {
        return Err(AnalysisError::FileNotFound(path.to_path_buf()));
    }

    let csv_error = |source: csv::Error| AnalysisError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_path(path)
        .map_err(csv_error)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut records = Vec::new();
    let mut undecodable = 0usize;
    for row in reader.byte_records() {
        let row = row.map_err(csv_error)?;
        let cells: std::result::Result<Vec<&str>, _> =
            row.iter().map(std::str::from_utf8).collect();

        let Ok(cells) = cells else {
            tracing::debug!(
                path = %path.display(),
                line = row.position().map(|p| p.line()),
                "skipping row with invalid UTF-8"
            );
            undecodable += 1;
            continue;
        };

        let record: RawRecord = headers
            .iter()
            .zip(cells)
            .map(|(header, cell)| (header.clone(), cell.to_string()))
            .collect();
        records.push(record);
    }

    tracing::debug!(
        path = %path.display(),
        rows = records.len(),
        undecodable,
        "loaded CSV"
    );

    Ok(CsvTable { headers, records })
}

/// Bucket the parsed values of `value_column` by the `group_by` columns
///
/// Rows missing a grouping column, or whose value does not parse, are
/// skipped. A key only appears once it holds at least one value.
pub fn group_samples(
    records: &[RawRecord],
    group_by: &[String],
    value_column: &str,
    transform: Transform,
) -> GroupedSamples {
    let mut groups = GroupedSamples::new();
    let mut skipped = 0usize;

    for record in records {
        let key: Option<GroupKey> = group_by
            .iter()
            .map(|column| record.get(column).cloned())
            .collect();

        let value = record.get(value_column).and_then(|raw| parse_value(raw));

        match (key, value) {
            (Some(key), Some(value)) => {
                groups.entry(key).or_default().push(transform.apply(value));
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!(value_column, skipped, "rows without a usable value");
    }

    groups
}

/// What a group of values turned into
#[derive(Debug, Clone, PartialEq)]
pub enum GroupOutcome {
    Summary(DescriptiveSummary),
    /// Every value is exactly zero, which the harness only produces when a
    /// measurement failed silently
    SuspectZero { n: usize },
}

impl GroupOutcome {
    pub fn summary(&self) -> Option<&DescriptiveSummary> {
        match self {
            Self::Summary(summary) => Some(summary),
            Self::SuspectZero { .. } => None,
        }
    }
}

/// Summarize a group, flagging all-zero samples instead of reporting them
pub fn evaluate_group(values: &[f64]) -> Option<GroupOutcome> {
    if values.is_empty() {
        return None;
    }

    if values.iter().all(|&v| v == 0.0) {
        return Some(GroupOutcome::SuspectZero { n: values.len() });
    }

    summarize(values).map(GroupOutcome::Summary)
}
