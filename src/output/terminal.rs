// Colored terminal output for ranked windows.
//
// This module handles all terminal-specific formatting: colors, score bars
// and layout. The main.rs display code delegates here.

use colored::Colorize;

use super::report::{AnalysisReport, KindReport, WindowReport};
use super::{describe_windows, format_score, truncate_chars};

const BAR_WIDTH: usize = 20;

/// Display the ranked windows of every kind in the report.
pub fn display_report(report: &AnalysisReport) {
    println!(
        "\n{}",
        format!(
            "=== {} vs. {} reference ({} tokens, {}) ===",
            report.source,
            report.reference,
            report.tokens,
            describe_windows(&report.window_prop)
        )
        .bold()
    );

    if report.kinds.is_empty() {
        println!("No representations to show.");
        return;
    }

    display_doc_scores(&report.kinds);

    for kind in &report.kinds {
        display_kind(kind);
    }
}

/// One line per kind with the whole-document score.
fn display_doc_scores(kinds: &[KindReport]) {
    println!();
    println!("  {}", "Whole document".dimmed());
    for kind in kinds {
        println!(
            "    {:<9} {} {}",
            kind.kind.as_str(),
            score_bar(kind.doc_score),
            format_score(kind.doc_score)
        );
    }
}

fn display_kind(kind: &KindReport) {
    println!(
        "\n{}",
        format!(
            "--- {} (top {} of {} windows) ---",
            kind.kind,
            kind.windows.len(),
            kind.window_count
        )
        .bold()
    );
    println!();

    if kind.windows.is_empty() {
        println!("  {}", "Document produced no windows.".dimmed());
        return;
    }

    for window in &kind.windows {
        display_window(window);
    }
}

fn display_window(window: &WindowReport) {
    println!(
        "  {:>2}. {} {:<6} chars {}..{}",
        window.rank,
        score_bar(window.score),
        format_score(window.score),
        window.start,
        window.end
    );
    println!("      {}", truncate_chars(&window.text, 140).dimmed());

    if !window.top_terms.is_empty() {
        let terms: Vec<String> = window
            .top_terms
            .iter()
            .map(|t| format!("{} ({})", t.term, t.count))
            .collect();
        println!("      Terms: {}", terms.join(", ").dimmed());
    }
    println!();
}

/// Fixed-width bar for a score in [-1, 1]; negative scores draw empty.
fn score_bar(score: Option<f64>) -> colored::ColoredString {
    let Some(score) = score else {
        return format!("[{}]", "?".repeat(BAR_WIDTH)).dimmed();
    };

    let filled = (score.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    let empty = BAR_WIDTH.saturating_sub(filled);
    let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

    if score >= 0.5 {
        bar.bright_green()
    } else if score >= 0.2 {
        bar.bright_yellow()
    } else {
        bar.bright_blue()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bar_width() {
        colored::control::set_override(false);
        assert_eq!(score_bar(Some(0.5)).to_string(), format!("[{}{}]", "=".repeat(10), " ".repeat(10)));
        assert_eq!(score_bar(Some(-0.3)).to_string(), format!("[{}]", " ".repeat(BAR_WIDTH)));
        assert_eq!(score_bar(None).to_string(), format!("[{}]", "?".repeat(BAR_WIDTH)));
    }
}
