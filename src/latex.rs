//! LaTeX (booktabs) rendering of a cross-platform comparison

use crate::compare::ComparisonReport;

/// Platform directory name as printed in the paper
///
/// `-` and `_` become spaces and every word is capitalized, so
/// `azure-premium_ssd` becomes `Azure Premium Ssd`.
pub fn clean_platform_name(platform: &str) -> String {
    platform
        .replace(['-', '_'], " ")
        .split(' ')
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Escape the characters LaTeX treats specially in running text
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '%' | '&' | '#' | '_' | '$' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Sample size shared by every platform, if there is one
fn common_n(report: &ComparisonReport) -> Option<usize> {
    let first = report.platforms.first()?.summary.n;
    report
        .platforms
        .iter()
        .all(|p| p.summary.n == first)
        .then_some(first)
}

/// Table with one row per platform: mean, σ, CI range, min and max
pub fn render_latex_table(report: &ComparisonReport) -> String {
    let unit = escape(&report.test.unit);
    let with_unit = |name: &str| {
        if unit.is_empty() {
            format!("\\textbf{{{}}}", name)
        } else {
            format!("\\textbf{{{} ({})}}", name, unit)
        }
    };

    let mut caption = format!(
        "{} ({}). Values reported as mean $\\pm$ 95\\% CI with standard deviation ($\\sigma$)",
        escape(&report.test.title),
        escape(&report.group_label)
    );
    match common_n(report) {
        Some(n) => caption.push_str(&format!(", $n={}$ iterations per platform.", n)),
        None => caption.push('.'),
    }

    let mut latex = String::new();
    latex.push_str("\\begin{table}[h]\n");
    latex.push_str("\\centering\n");
    latex.push_str(&format!("\\caption{{{}}}\n", caption));
    latex.push_str(&format!("\\label{{tab:{}}}\n", report.test.id));
    latex.push_str("\\begin{tabular}{lccccc}\n");
    latex.push_str("\\toprule\n");
    latex.push_str(&format!(
        "\\textbf{{Platform}} & {} & {} & \\textbf{{95\\% CI}} & \\textbf{{Min}} & \\textbf{{Max}} \\\\\n",
        with_unit("Mean"),
        with_unit("$\\sigma$")
    ));
    latex.push_str("\\midrule\n");

    for p in &report.platforms {
        let s = &p.summary;
        latex.push_str(&format!(
            "{} & {:.1} & {:.1} & [{:.1}, {:.1}] & {:.1} & {:.1} \\\\\n",
            escape(&clean_platform_name(&p.platform)),
            s.mean,
            s.std,
            s.ci_lower,
            s.ci_upper,
            s.min,
            s.max
        ));
    }

    latex.push_str("\\bottomrule\n");
    latex.push_str("\\end{tabular}\n");
    latex.push_str("\\end{table}\n");
    latex
}
