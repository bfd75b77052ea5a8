// Markdown report generation.
//
// Writes one section per representation kind with a ranked window table,
// followed by the full text of the top windows.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::report::AnalysisReport;
use super::{describe_windows, format_score, truncate_chars};

/// Render a report as Markdown.
pub fn render(report: &AnalysisReport) -> String {
    let mut md = String::new();

    let _ = writeln!(md, "# Relevance report: {}\n", report.source);
    let _ = writeln!(
        md,
        "Generated {} against the **{}** reference.\n",
        report.generated_at.format("%Y-%m-%d %H:%M UTC"),
        report.reference
    );
    let _ = writeln!(
        md,
        "- Tokens: {}\n- Windows: {}\n",
        report.tokens,
        describe_windows(&report.window_prop)
    );

    md.push_str("## Whole-document similarity\n\n");
    md.push_str("| Representation | Score |\n|---|---|\n");
    for kind in &report.kinds {
        let _ = writeln!(md, "| {} | {} |", kind.kind, format_score(kind.doc_score));
    }
    md.push('\n');

    for kind in &report.kinds {
        let _ = writeln!(
            md,
            "## Top windows by {} ({} of {})\n",
            kind.kind,
            kind.windows.len(),
            kind.window_count
        );

        if kind.windows.is_empty() {
            md.push_str("_No windows._\n\n");
            continue;
        }

        md.push_str("| Rank | Score | Chars | Terms | Preview |\n|---|---|---|---|---|\n");
        for window in &kind.windows {
            let terms: Vec<&str> = window.top_terms.iter().map(|t| t.term.as_str()).collect();
            let _ = writeln!(
                md,
                "| {} | {} | {}..{} | {} | {} |",
                window.rank,
                format_score(window.score),
                window.start,
                window.end,
                terms.join(", "),
                escape_cell(&truncate_chars(&window.text, 80)),
            );
        }
        md.push('\n');

        for window in &kind.windows {
            let _ = writeln!(
                md,
                "### {}. {} (score {})\n\n> {}\n",
                window.rank,
                kind.kind,
                format_score(window.score),
                window.text.replace('\n', "\n> ")
            );
        }
    }

    md
}

/// Render and write a report, creating parent directories as needed.
/// Returns the path written.
pub fn write_report(report: &AnalysisReport, path: &Path) -> Result<String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, render(report))
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    Ok(path.display().to_string())
}

/// Keep table cells on one line and free of column separators.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::{KindReport, TermCount, WindowReport};
    use crate::repr::kind::ReprKind;
    use crate::segment::WindowProp;

    fn sample() -> AnalysisReport {
        AnalysisReport {
            source: "paper.txt".to_string(),
            reference: "values".to_string(),
            generated_at: chrono::Utc::now(),
            window_prop: WindowProp::sentences(),
            tokens: 12,
            kinds: vec![KindReport {
                kind: ReprKind::Bow,
                doc_score: Some(0.4),
                window_count: 2,
                windows: vec![WindowReport {
                    rank: 1,
                    start: 0,
                    end: 20,
                    score: Some(0.75),
                    text: "Honesty | fairness".to_string(),
                    top_terms: vec![TermCount {
                        term: "honesty".to_string(),
                        count: 1.0,
                    }],
                }],
            }],
        }
    }

    #[test]
    fn test_render_contains_sections() {
        let md = render(&sample());
        assert!(md.starts_with("# Relevance report: paper.txt"));
        assert!(md.contains("| bow | 0.400 |"));
        assert!(md.contains("## Top windows by bow (1 of 2)"));
        assert!(md.contains("Honesty \\| fairness"));
        assert!(md.contains("- Windows: sentences"));
    }

    #[test]
    fn test_write_report_creates_directories() {
        let dir = std::env::temp_dir().join(format!("axidoc_report_{}", std::process::id()));
        let path = dir.join("nested").join("report.md");
        let written = write_report(&sample(), &path).unwrap();
        assert!(written.ends_with("report.md"));
        assert!(fs::read_to_string(&path).unwrap().contains("paper.txt"));
        fs::remove_dir_all(dir).ok();
    }
}
