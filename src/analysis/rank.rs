// Ranks windows by similarity score.
//
// Sorting is stable and descending. Windows whose score is undefined go last,
// and windows with equal scores keep their segmentation order, so ranking an
// already ranked wrapper changes nothing.

use std::cmp::Ordering;

use tracing::debug;

use super::types::{DocumentWrapper, WindowRepresentation};
use crate::error::Result;
use crate::repr::kind::ReprKind;

/// Return a copy of `wrapper` with windows sorted by score.
///
/// `None` sorts every kind present; otherwise only `kind` is sorted and the
/// other kinds keep their order.
pub fn rank(wrapper: &DocumentWrapper, kind: Option<ReprKind>) -> DocumentWrapper {
    let kinds = match kind {
        Some(k) => vec![k],
        None => ReprKind::ALL.to_vec(),
    };

    kinds.into_iter().fold(wrapper.clone(), |ranked, kind| {
        let Some(sim) = ranked.get(kind) else {
            return ranked;
        };
        let sorted = sort_windows(sim.window_repr());
        debug!(kind = %kind, windows = sorted.len(), "Ranked windows");
        let sim = sim.with_window_repr(sorted);
        ranked.with_repr(kind, sim)
    })
}

/// Like [`rank`], taking the kind by name (`"bow"`, `"glove"`, `"word2vec"`).
///
/// An unknown name is an `InvalidArgument` error.
pub fn rank_by_name(wrapper: &DocumentWrapper, kind: Option<&str>) -> Result<DocumentWrapper> {
    let kind = kind.map(str::parse::<ReprKind>).transpose()?;
    Ok(rank(wrapper, kind))
}

fn sort_windows(windows: &[WindowRepresentation]) -> Vec<WindowRepresentation> {
    let mut sorted = windows.to_vec();
    sorted.sort_by(|a, b| by_score_desc(a.similarity_score(), b.similarity_score()));
    sorted
}

/// Total order: NaN counts as undefined, and `-0.0` ties with `0.0`.
fn by_score_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    let defined = |s: Option<f64>| s.filter(|v| !v.is_nan()).map(|v| v + 0.0);
    match (defined(a), defined(b)) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
