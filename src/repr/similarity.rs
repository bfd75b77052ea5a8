// Cosine similarity between representations.
//
// BoW count vectors are compared directly. Embedding matrices are first
// mean-pooled (column-wise average over token rows) into one vector each.
//
// A missing representation or an empty matrix leaves similarity undefined,
// which is reported as `None` rather than an error so that one degenerate
// window does not abort a whole analysis.

use tracing::warn;

use super::array::{ReprArray, Representations, Scores};
use super::kind::ReprKind;

/// Column-wise mean of a token matrix. `None` when there are no rows.
///
/// Rows shorter than the first row contribute zeros for the missing columns.
pub fn mean_pool(rows: &[Vec<f32>]) -> Option<Vec<f64>> {
    let first = rows.first()?;
    let dim = first.len();
    let n = rows.len() as f64;
    let mut mean = vec![0.0_f64; dim];

    for row in rows {
        for (acc, &val) in mean.iter_mut().zip(row.iter()) {
            *acc += val as f64;
        }
    }
    for val in &mut mean {
        *val /= n;
    }

    Some(mean)
}

/// Cosine similarity `dot(a, b) / (|a| * |b|)`, clamped to [-1, 1].
///
/// Returns `None` for empty or mismatched vectors or a non-finite result,
/// and exactly `0.0` when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Option<f64> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    let denom = mag_a * mag_b;
    if !dot.is_finite() || !denom.is_finite() {
        return None;
    }
    if denom < f64::EPSILON {
        Some(0.0)
    } else {
        Some((dot / denom).clamp(-1.0, 1.0))
    }
}

/// Similarity of two representations of the same kind.
pub fn score(kind: ReprKind, a: Option<&ReprArray>, b: Option<&ReprArray>) -> Option<f64> {
    let (Some(a), Some(b)) = (a, b) else {
        warn!(kind = %kind, "Representation missing, similarity cannot be computed");
        return None;
    };

    let (Some(u), Some(v)) = (a.pooled(), b.pooled()) else {
        warn!(kind = %kind, "Representation has no tokens, similarity is undefined");
        return None;
    };

    let sim = cosine_similarity(&u, &v);
    if sim.is_none() {
        warn!(
            kind = %kind,
            left = u.len(),
            right = v.len(),
            "Representation widths differ, similarity is undefined"
        );
    }
    sim
}

/// Scores of `target` against `comparison` for all three kinds.
pub fn similarity_scores(target: &Representations, comparison: &Representations) -> Scores {
    let of = |kind| score(kind, Some(target.get(kind)), Some(comparison.get(kind)));
    Scores {
        bow: of(ReprKind::Bow),
        glove: of(ReprKind::Glove),
        word2vec: of(ReprKind::Word2Vec),
    }
}
