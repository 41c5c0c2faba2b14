//! dockbench - statistical analysis of container benchmark results
//!
//! This library turns the per-test CSV files written by the container
//! benchmark harness into descriptive statistics with 95% confidence
//! intervals, and compares platforms with a Mann-Whitney U test and
//! Cliff's delta effect size.

pub mod analysis;
pub mod cli;
pub mod compare;
pub mod dataset;
pub mod error;
pub mod latex;
pub mod report;
pub mod schema;
pub mod significance;
pub mod stats;
pub mod value;
