use anyhow::{Context, Result};
use clap::Parser;
use dockbench::analysis::analyze_directory;
use dockbench::cli::{Cli, Mode};
use dockbench::compare::compare_platforms;
use dockbench::latex::render_latex_table;
use dockbench::report;
use dockbench::schema::{ComparisonSpec, Registry};
use dockbench::significance::{select_backend, SignificanceBackend};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber; logs go to stderr, the report to stdout
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Built-in registry, or the one given with --config
fn load_registry(config: Option<&Path>) -> Result<Registry> {
    match config {
        Some(path) => Registry::from_toml(path)
            .with_context(|| format!("failed to load benchmark registry {}", path.display())),
        None => Registry::builtin().context("built-in benchmark registry is invalid"),
    }
}

/// Registry comparison target with --test/--group applied
fn comparison_spec(args: &Cli, registry: &Registry) -> Result<ComparisonSpec> {
    let mut spec = registry.comparison.clone();
    if let Some(test) = &args.compare_test {
        spec.test = test.clone();
    }
    if let Some(group) = &args.group {
        spec.group = group.clone();
    }
    registry
        .check_comparison(&spec)
        .context("invalid comparison target")?;
    Ok(spec)
}

fn run_single(dir: &Path, registry: &Registry) {
    let report = analyze_directory(dir, registry);
    print!("{}", report::render_directory_report(&report));
    println!();
}

fn run_compare(
    dirs: &[PathBuf],
    registry: &Registry,
    spec: &ComparisonSpec,
    backend: &dyn SignificanceBackend,
    latex: bool,
) -> Result<()> {
    for dir in dirs {
        let report = analyze_directory(dir, registry);
        print!("{}", report::render_platform_banner(&report.platform));
        print!("{}", report::render_directory_tests(&report));
    }

    let comparison = compare_platforms(dirs, registry, spec, backend)?;
    print!("{}", report::render_comparison(&comparison));

    if latex && comparison.has_enough_platforms() {
        print!("{}", report::render_header("LATEX TABLE (copy into paper)"));
        println!();
        print!("{}", render_latex_table(&comparison));
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let mode = args.mode()?;
    let registry = load_registry(args.config.as_deref())?;

    for flag in args.ignored_compare_flags() {
        tracing::warn!("{} only applies to --compare; ignoring", flag);
    }

    match mode {
        Mode::Single(dir) => run_single(&dir, &registry),
        Mode::Compare(dirs) => {
            let spec = comparison_spec(&args, &registry)?;
            let backend = select_backend(!args.no_significance, registry.significance.clone());
            tracing::debug!(backend = backend.name(), "significance backend");
            run_compare(&dirs, &registry, &spec, backend.as_ref(), args.latex)?;
        }
    }

    Ok(())
}
