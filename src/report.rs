//! Console rendering of analysis and comparison results

use crate::analysis::{DirectoryReport, GroupReport, TestOutcome, TestReport};
use crate::compare::ComparisonReport;
use crate::dataset::GroupOutcome;
use crate::stats::DescriptiveSummary;

const RULE_WIDTH: usize = 70;

/// Value followed by its unit, if there is one
fn with_unit(value: String, unit: &str) -> String {
    if unit.is_empty() {
        value
    } else {
        format!("{} {}", value, unit)
    }
}

/// Section header framed by `=` rules
pub fn render_header(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("\n{}\n  {}\n{}\n", rule, title, rule)
}

/// Banner printed before each platform in comparison mode
pub fn render_platform_banner(platform: &str) -> String {
    let rule = "#".repeat(RULE_WIDTH);
    format!("\n{}\n# Platform: {}\n{}\n", rule, platform, rule)
}

/// Metric/value table of one summary
pub fn render_summary_table(label: &str, s: &DescriptiveSummary, unit: &str) -> String {
    let thin = "─".repeat(60);
    let mut table = String::new();

    table.push_str(&format!("\n  {}\n", label));
    table.push_str(&format!("  {}\n", thin));
    table.push_str(&format!("  {:<20} {:>12}\n", "Metric", "Value"));
    table.push_str(&format!("  {}\n", thin));
    table.push_str(&format!("  {:<20} {:>12}\n", "n (samples)", s.n));

    let rows = [
        ("Mean", s.mean),
        ("Median", s.median),
        ("Std Dev (σ)", s.std),
    ];
    for (name, value) in rows {
        table.push_str(&format!(
            "  {:<20} {}\n",
            name,
            with_unit(format!("{:>12.2}", value), unit)
        ));
    }

    table.push_str(&format!(
        "  {:<20} {}\n",
        "95% CI",
        with_unit(format!("{:>6}{:>6.2}", "±", s.ci_95), unit)
    ));
    table.push_str(&format!(
        "  {:<20} [{:.2}, {:.2}]\n",
        "95% CI range", s.ci_lower, s.ci_upper
    ));
    table.push_str(&format!(
        "  {:<20} {}\n",
        "Min",
        with_unit(format!("{:>12.2}", s.min), unit)
    ));
    table.push_str(&format!(
        "  {:<20} {}\n",
        "Max",
        with_unit(format!("{:>12.2}", s.max), unit)
    ));

    table
}

fn render_group(group: &GroupReport, unit: &str) -> String {
    match &group.outcome {
        GroupOutcome::Summary(summary) => render_summary_table(&group.label, summary, unit),
        GroupOutcome::SuspectZero { n } => format!(
            "\n  {}\n  [WARN] all {} values are zero; suspected collection defect, not reported\n",
            group.label, n
        ),
    }
}

/// One test: skip notice, or header plus one table per group
pub fn render_test_report(report: &TestReport<'_>) -> String {
    match &report.outcome {
        TestOutcome::Skipped { reason } => format!("  [SKIP] {}\n", reason),
        TestOutcome::Analyzed { groups, overhead } => {
            let mut section = render_header(&report.test.title);
            for group in groups {
                section.push_str(&render_group(group, &report.test.unit));
            }
            if let Some(overhead) = overhead {
                section.push_str(&format!(
                    "\n  {}: {:.1}%\n",
                    overhead.label, overhead.percent
                ));
            }
            section
        }
    }
}

/// Every test of a directory, in registry order
pub fn render_directory_tests(report: &DirectoryReport<'_>) -> String {
    report.tests.iter().map(render_test_report).collect()
}

/// Full single-directory report
pub fn render_directory_report(report: &DirectoryReport<'_>) -> String {
    let mut text = String::new();
    text.push_str(&format!("Analyzing: {}\n", report.dir.display()));
    text.push_str(&format!("Platform:  {}\n", report.platform));

    text.push_str(&render_directory_tests(report));

    text.push_str(&render_header("ANALYSIS COMPLETE"));
    text.push_str(&format!("  Results directory: {}\n", report.dir.display()));
    text.push_str(&format!(
        "  Tests analysed: {}, skipped: {}\n",
        report.tests.len() - report.skipped_count(),
        report.skipped_count()
    ));
    text.push_str("  To compare across platforms, re-run with --compare\n");
    text
}

/// Cross-platform table followed by the pairwise significance tests
pub fn render_comparison(report: &ComparisonReport) -> String {
    let mut text = render_header("CROSS-PLATFORM COMPARISON");

    for exclusion in &report.excluded {
        text.push_str(&format!(
            "  [SKIP] {}: {}\n",
            exclusion.platform, exclusion.reason
        ));
    }

    if !report.has_enough_platforms() {
        text.push_str("  Need at least 2 platforms for comparison.\n");
        return text;
    }

    let thin = "─".repeat(RULE_WIDTH);
    let mean_header = if report.test.unit.is_empty() {
        "Mean".to_string()
    } else {
        format!("Mean ({})", report.test.unit)
    };

    text.push_str(&format!(
        "\n  TABLE FOR PAPER: {} - {}\n",
        report.test.title, report.group_label
    ));
    text.push_str(&format!("  {}\n", thin));
    text.push_str(&format!(
        "  {:<30} {:>10} {:>8} {:>14} {:>6}\n",
        "Platform", mean_header, "σ", "95% CI", "n"
    ));
    text.push_str(&format!("  {}\n", thin));
    for p in &report.platforms {
        let s = &p.summary;
        text.push_str(&format!(
            "  {:<30} {:>10.1} {:>8.1} [{:.1}, {:.1}] {:>6}\n",
            p.platform, s.mean, s.std, s.ci_lower, s.ci_upper, s.n
        ));
    }
    text.push_str(&format!("  {}\n", thin));

    if !report.significance_available {
        text.push_str("\n  Significance testing unavailable; pairwise tests skipped.\n");
        return text;
    }

    if report.pairs.is_empty() {
        return text;
    }

    text.push_str("\n  SIGNIFICANCE TESTS (Mann-Whitney U)\n");
    text.push_str(&format!("  {}\n", thin));
    for pair in &report.pairs {
        let r = &pair.result;
        let verdict = if r.significant { "YES ✓" } else { "NO" };
        text.push_str(&format!("  {} vs {}:\n", pair.first, pair.second));
        text.push_str(&format!(
            "    U = {:?}, p = {:.6}, significant: {}\n",
            r.u_statistic, r.p_value, verdict
        ));
        text.push_str(&format!(
            "    Cliff's δ = {:?} ({} effect)\n\n",
            r.cliffs_delta, r.effect_size
        ));
    }

    text
}
