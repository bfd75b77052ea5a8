// Analysis result types.
//
// Results are built once by the assembler and never mutated afterwards.
// Re-ordering (ranking) produces new values through the `with_*` methods.

use crate::nlp::document::Document;
use crate::repr::array::ReprArray;
use crate::repr::bow::CountVectorizer;
use crate::repr::kind::ReprKind;
use crate::segment::WindowProp;

/// One window's representation of a single kind and its score.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowRepresentation {
    arr: ReprArray,
    pos: (usize, usize),
    similarity_score: Option<f64>,
}

impl WindowRepresentation {
    pub fn new(arr: ReprArray, pos: (usize, usize), similarity_score: Option<f64>) -> Self {
        Self {
            arr,
            pos,
            similarity_score,
        }
    }

    pub fn arr(&self) -> &ReprArray {
        &self.arr
    }

    /// `(start, end)` character offsets in the target text.
    pub fn pos(&self) -> (usize, usize) {
        self.pos
    }

    /// Cosine similarity to the comparison text; `None` when undefined.
    pub fn similarity_score(&self) -> Option<f64> {
        self.similarity_score
    }

    pub fn with_score(&self, similarity_score: Option<f64>) -> Self {
        Self {
            similarity_score,
            ..self.clone()
        }
    }
}

/// Everything computed for one representation kind.
#[derive(Debug, Clone, PartialEq)]
pub struct SimRepresentation {
    name: ReprKind,
    doc_representation: ReprArray,
    comparison_array: Option<ReprArray>,
    window_repr: Vec<WindowRepresentation>,
    doc_score: Option<f64>,
}

impl SimRepresentation {
    pub fn new(
        name: ReprKind,
        doc_representation: ReprArray,
        comparison_array: Option<ReprArray>,
        window_repr: Vec<WindowRepresentation>,
        doc_score: Option<f64>,
    ) -> Self {
        Self {
            name,
            doc_representation,
            comparison_array,
            window_repr,
            doc_score,
        }
    }

    pub fn name(&self) -> ReprKind {
        self.name
    }

    /// Representation of the whole target text.
    pub fn doc_representation(&self) -> &ReprArray {
        &self.doc_representation
    }

    /// Representation of the comparison text.
    pub fn comparison_array(&self) -> Option<&ReprArray> {
        self.comparison_array.as_ref()
    }

    pub fn window_repr(&self) -> &[WindowRepresentation] {
        &self.window_repr
    }

    /// Similarity of the whole target text to the comparison text.
    pub fn doc_score(&self) -> Option<f64> {
        self.doc_score
    }

    pub fn with_window_repr(&self, window_repr: Vec<WindowRepresentation>) -> Self {
        Self {
            name: self.name,
            doc_representation: self.doc_representation.clone(),
            comparison_array: self.comparison_array.clone(),
            window_repr,
            doc_score: self.doc_score,
        }
    }
}

/// The analyzed target document with its per-kind results.
#[derive(Debug, Clone)]
pub struct DocumentWrapper {
    doc: Document,
    bow: Option<SimRepresentation>,
    glove: Option<SimRepresentation>,
    word2vec: Option<SimRepresentation>,
    window_prop: WindowProp,
    vocabulary: CountVectorizer,
}

impl DocumentWrapper {
    pub fn new(
        doc: Document,
        bow: Option<SimRepresentation>,
        glove: Option<SimRepresentation>,
        word2vec: Option<SimRepresentation>,
        window_prop: WindowProp,
    ) -> Self {
        Self {
            doc,
            bow,
            glove,
            word2vec,
            window_prop,
            vocabulary: CountVectorizer::new(),
        }
    }

    /// Attach the BoW vocabulary the count vectors were built with.
    pub fn with_vocabulary(mut self, vocabulary: CountVectorizer) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Vocabulary behind every BoW count vector of this wrapper, for mapping
    /// counts back to terms. Unfitted when the wrapper was built without one.
    pub fn vocabulary(&self) -> &CountVectorizer {
        &self.vocabulary
    }

    /// The target text as tokenized by the GloVe provider.
    pub fn doc(&self) -> &Document {
        &self.doc
    }

    pub fn window_prop(&self) -> &WindowProp {
        &self.window_prop
    }

    pub fn get(&self, kind: ReprKind) -> Option<&SimRepresentation> {
        match kind {
            ReprKind::Bow => self.bow.as_ref(),
            ReprKind::Glove => self.glove.as_ref(),
            ReprKind::Word2Vec => self.word2vec.as_ref(),
        }
    }

    pub fn bow(&self) -> Option<&SimRepresentation> {
        self.bow.as_ref()
    }

    pub fn glove(&self) -> Option<&SimRepresentation> {
        self.glove.as_ref()
    }

    pub fn word2vec(&self) -> Option<&SimRepresentation> {
        self.word2vec.as_ref()
    }

    /// Copy with the representation of `kind` replaced.
    pub fn with_repr(&self, kind: ReprKind, sim: SimRepresentation) -> Self {
        let mut next = self.clone();
        match kind {
            ReprKind::Bow => next.bow = Some(sim),
            ReprKind::Glove => next.glove = Some(sim),
            ReprKind::Word2Vec => next.word2vec = Some(sim),
        }
        next
    }

    /// Whether all present kinds list the same window positions in the same order.
    pub fn is_aligned(&self) -> bool {
        let mut present = ReprKind::ALL.iter().filter_map(|&k| self.get(k));
        let Some(first) = present.next() else {
            return true;
        };
        let positions: Vec<_> = first.window_repr().iter().map(|w| w.pos()).collect();
        present.all(|sim| {
            sim.window_repr().len() == positions.len()
                && sim
                    .window_repr()
                    .iter()
                    .zip(&positions)
                    .all(|(w, &p)| w.pos() == p)
        })
    }
}
