// Numeric forms of a representation and the per-kind triple.

use super::kind::ReprKind;

/// The numeric form of one representation.
#[derive(Debug, Clone, PartialEq)]
pub enum ReprArray {
    /// BoW term counts over the shared vocabulary.
    Counts(Vec<f64>),
    /// One embedding row per token.
    Embeddings(Vec<Vec<f32>>),
}

impl ReprArray {
    /// Number of rows: 1 for a count vector, token count for a matrix.
    pub fn rows(&self) -> usize {
        match self {
            ReprArray::Counts(_) => 1,
            ReprArray::Embeddings(m) => m.len(),
        }
    }

    /// Width of the vector / matrix rows.
    pub fn width(&self) -> usize {
        match self {
            ReprArray::Counts(v) => v.len(),
            ReprArray::Embeddings(m) => m.first().map_or(0, Vec::len),
        }
    }

    /// Collapse to a single vector: counts as-is, matrices mean-pooled.
    /// Returns `None` for a matrix with no rows.
    pub fn pooled(&self) -> Option<Vec<f64>> {
        match self {
            ReprArray::Counts(v) => Some(v.clone()),
            ReprArray::Embeddings(m) => super::similarity::mean_pool(m),
        }
    }
}

/// The `(bow, glove, word2vec)` representations of one text or window.
#[derive(Debug, Clone, PartialEq)]
pub struct Representations {
    pub bow: ReprArray,
    pub glove: ReprArray,
    pub word2vec: ReprArray,
}

impl Representations {
    pub fn get(&self, kind: ReprKind) -> &ReprArray {
        match kind {
            ReprKind::Bow => &self.bow,
            ReprKind::Glove => &self.glove,
            ReprKind::Word2Vec => &self.word2vec,
        }
    }

    /// Split into arrays in [`ReprKind::ALL`] order.
    pub fn into_arrays(self) -> [ReprArray; 3] {
        [self.bow, self.glove, self.word2vec]
    }
}

/// Similarity scores per kind; `None` where similarity is undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Scores {
    pub bow: Option<f64>,
    pub glove: Option<f64>,
    pub word2vec: Option<f64>,
}

impl Scores {
    pub fn get(&self, kind: ReprKind) -> Option<f64> {
        match kind {
            ReprKind::Bow => self.bow,
            ReprKind::Glove => self.glove,
            ReprKind::Word2Vec => self.word2vec,
        }
    }
}
