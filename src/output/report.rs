// Flattened view of an analysis, shared by the terminal, Markdown and JSON
// outputs.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::types::DocumentWrapper;
use crate::repr::array::ReprArray;
use crate::repr::kind::ReprKind;
use crate::segment::WindowProp;

/// A vocabulary term and its count in a window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermCount {
    pub term: String,
    pub count: f64,
}

/// One ranked window.
#[derive(Debug, Clone, Serialize)]
pub struct WindowReport {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub start: usize,
    pub end: usize,
    pub score: Option<f64>,
    pub text: String,
    /// Most frequent BoW terms of the window.
    pub top_terms: Vec<TermCount>,
}

/// Ranked windows of one representation kind.
#[derive(Debug, Clone, Serialize)]
pub struct KindReport {
    pub kind: ReprKind,
    /// Similarity of the whole document to the reference.
    pub doc_score: Option<f64>,
    pub window_count: usize,
    pub windows: Vec<WindowReport>,
}

/// Everything a report shows about one analyzed document.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub source: String,
    pub reference: String,
    pub generated_at: DateTime<Utc>,
    pub window_prop: WindowProp,
    pub tokens: usize,
    pub kinds: Vec<KindReport>,
}

/// How much of each ranking to include.
#[derive(Debug, Clone, Copy)]
pub struct ReportLimits {
    /// Windows per kind.
    pub top: usize,
    /// Terms per window.
    pub terms: usize,
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self { top: 5, terms: 5 }
    }
}

impl AnalysisReport {
    /// Summarize a ranked wrapper. Window terms come from the vocabulary the
    /// wrapper's BoW vectors were built with.
    pub fn from_wrapper(
        wrapper: &DocumentWrapper,
        source: impl Into<String>,
        reference: impl Into<String>,
        kinds: &[ReprKind],
        limits: ReportLimits,
    ) -> Self {
        let kinds = kinds
            .iter()
            .filter_map(|&kind| wrapper.get(kind))
            .map(|sim| KindReport {
                kind: sim.name(),
                doc_score: sim.doc_score(),
                window_count: sim.window_repr().len(),
                windows: sim
                    .window_repr()
                    .iter()
                    .take(limits.top)
                    .enumerate()
                    .map(|(i, w)| {
                        let (start, end) = w.pos();
                        WindowReport {
                            rank: i + 1,
                            start,
                            end,
                            score: w.similarity_score(),
                            text: wrapper.doc().slice_chars(start, end).trim().to_string(),
                            top_terms: window_terms(wrapper, w.pos(), limits.terms),
                        }
                    })
                    .collect(),
            })
            .collect();

        Self {
            source: source.into(),
            reference: reference.into(),
            generated_at: Utc::now(),
            window_prop: *wrapper.window_prop(),
            tokens: wrapper.doc().len(),
            kinds,
        }
    }
}

/// Top BoW terms of the window at `pos`, whatever kind is being reported.
fn window_terms(
    wrapper: &DocumentWrapper,
    pos: (usize, usize),
    n: usize,
) -> Vec<TermCount> {
    let Some(bow) = wrapper.get(ReprKind::Bow) else {
        return Vec::new();
    };
    let counts = bow
        .window_repr()
        .iter()
        .find(|w| w.pos() == pos)
        .map(|w| w.arr());

    match counts {
        Some(ReprArray::Counts(counts)) => wrapper
            .vocabulary()
            .top_terms(counts, n)
            .into_iter()
            .map(|(term, count)| TermCount { term, count })
            .collect(),
        _ => Vec::new(),
    }
}
