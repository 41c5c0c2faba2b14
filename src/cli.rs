//! CLI argument parsing for dockbench

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dockbench")]
#[command(version)]
#[command(
    about = "Statistical analysis of container benchmark results",
    long_about = None
)]
pub struct Cli {
    /// Results directories, one per platform
    #[arg(value_name = "DIR", required = true)]
    pub dirs: Vec<PathBuf>,

    /// Compare the configured group across platforms (needs at least 2 directories)
    #[arg(long)]
    pub compare: bool,

    /// Also print the comparison as a LaTeX table (compare mode only)
    #[arg(long)]
    pub latex: bool,

    /// Benchmark registry TOML to use instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Test id compared across platforms (overrides the registry)
    #[arg(long = "test", value_name = "ID")]
    pub compare_test: Option<String>,

    /// Group key values compared across platforms, comma separated (e.g., alpine,warm)
    #[arg(long, value_name = "V,V", value_delimiter = ',')]
    pub group: Option<Vec<String>>,

    /// Disable Mann-Whitney significance testing
    #[arg(long = "no-significance")]
    pub no_significance: bool,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

/// What a valid invocation asks for
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Single(PathBuf),
    Compare(Vec<PathBuf>),
}

impl Cli {
    /// Check the directory arguments against the requested mode
    pub fn mode(&self) -> Result<Mode> {
        if let Some(missing) = self.dirs.iter().find(|dir| !dir.is_dir()) {
            bail!("{} is not a directory", missing.display());
        }

        if self.compare {
            if self.dirs.len() < 2 {
                bail!("Need at least 2 platform directories for comparison.");
            }
            return Ok(Mode::Compare(self.dirs.clone()));
        }

        match self.dirs.as_slice() {
            [dir] => Ok(Mode::Single(dir.clone())),
            _ => bail!(
                "{} directories given; use --compare to analyse more than one platform",
                self.dirs.len()
            ),
        }
    }

    /// Comparison-only flags given without --compare
    pub fn ignored_compare_flags(&self) -> Vec<&'static str> {
        if self.compare {
            return Vec::new();
        }

        let mut ignored = Vec::new();
        if self.latex {
            ignored.push("--latex");
        }
        if self.compare_test.is_some() {
            ignored.push("--test");
        }
        if self.group.is_some() {
            ignored.push("--group");
        }
        ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn path_str(dir: &TempDir) -> &str {
        dir.path().to_str().unwrap()
    }

    #[test]
    fn test_cli_requires_a_directory() {
        assert!(Cli::try_parse_from(["dockbench"]).is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["dockbench", "results/local"]);
        assert_eq!(cli.dirs, vec![PathBuf::from("results/local")]);
        assert!(!cli.compare);
        assert!(!cli.latex);
        assert!(!cli.no_significance);
        assert!(!cli.debug);
        assert!(cli.config.is_none());
        assert!(cli.compare_test.is_none());
        assert!(cli.group.is_none());
    }

    #[test]
    fn test_cli_compare_flags() {
        let cli = Cli::parse_from([
            "dockbench",
            "--compare",
            "--latex",
            "--test",
            "pull",
            "--group",
            "nginx",
            "results/a",
            "results/b",
        ]);
        assert!(cli.compare);
        assert!(cli.latex);
        assert_eq!(cli.compare_test.as_deref(), Some("pull"));
        assert_eq!(cli.group, Some(vec!["nginx".to_string()]));
        assert_eq!(cli.dirs.len(), 2);
    }

    #[test]
    fn test_cli_group_is_comma_separated() {
        let cli = Cli::parse_from(["dockbench", "--group", "ubuntu,cold", "results/a"]);
        assert_eq!(
            cli.group,
            Some(vec!["ubuntu".to_string(), "cold".to_string()])
        );
    }

    #[test]
    fn test_cli_config_and_no_significance() {
        let cli = Cli::parse_from([
            "dockbench",
            "--config",
            "bench.toml",
            "--no-significance",
            "--debug",
            "results/a",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("bench.toml")));
        assert!(cli.no_significance);
        assert!(cli.debug);
    }

    #[test]
    fn test_mode_single() {
        let dir = TempDir::new().unwrap();
        let cli = Cli::parse_from(["dockbench", path_str(&dir)]);
        assert_eq!(cli.mode().unwrap(), Mode::Single(dir.path().to_path_buf()));
    }

    #[test]
    fn test_mode_compare() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        let cli = Cli::parse_from([
            "dockbench",
            "--compare",
            path_str(&a),
            path_str(&b),
        ]);
        assert_eq!(
            cli.mode().unwrap(),
            Mode::Compare(vec![a.path().to_path_buf(), b.path().to_path_buf()])
        );
    }

    #[test]
    fn test_mode_compare_needs_two() {
        let a = TempDir::new().unwrap();
        let cli = Cli::parse_from(["dockbench", "--compare", path_str(&a)]);
        let err = cli.mode().unwrap_err();
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn test_mode_two_dirs_without_compare() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        let cli = Cli::parse_from(["dockbench", path_str(&a), path_str(&b)]);
        assert!(cli.mode().is_err());
    }

    #[test]
    fn test_compare_flags_ignored_in_single_mode() {
        let cli = Cli::parse_from([
            "dockbench",
            "--latex",
            "--test",
            "pull",
            "--group",
            "nginx",
            "results/a",
        ]);
        assert_eq!(cli.ignored_compare_flags(), vec!["--latex", "--test", "--group"]);

        let cli = Cli::parse_from(["dockbench", "--group", "alpine,warm", "results/a"]);
        assert_eq!(cli.ignored_compare_flags(), vec!["--group"]);
    }

    #[test]
    fn test_compare_flags_used_in_compare_mode() {
        let cli = Cli::parse_from([
            "dockbench",
            "--compare",
            "--latex",
            "--test",
            "pull",
            "results/a",
            "results/b",
        ]);
        assert!(cli.ignored_compare_flags().is_empty());

        let cli = Cli::parse_from(["dockbench", "results/a"]);
        assert!(cli.ignored_compare_flags().is_empty());
    }

    #[test]
    fn test_mode_missing_directory() {
        let cli = Cli::parse_from(["dockbench", "/nonexistent/results/dir"]);
        let err = cli.mode().unwrap_err();
        assert!(err.to_string().contains("is not a directory"));
    }
}
