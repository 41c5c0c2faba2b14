//! Error types for result loading and registry configuration
//!
//! The statistics core never fails: unparseable values, empty samples and
//! undersized comparisons all resolve to `None`. Errors only come from
//! reading files and loading the benchmark registry.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading results or configuration
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("{} not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{file} has no '{column}' column")]
    MissingColumn { file: String, column: String },

    #[error("failed to parse benchmark registry: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid benchmark registry: {0}")]
    InvalidRegistry(String),
}

/// Result type for loading operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
