// Builds a fully scored DocumentWrapper from a target and a comparison text.
//
// Steps:
//   1. Strip control characters from both texts
//   2. Fit a fresh BoW vocabulary on the pair
//   3. Represent and score the whole target against the comparison
//   4. Segment the GloVe-tokenized target and score every window,
//      or reuse the whole-document results when windowing is unset
//
// Any error aborts the build; no partially filled wrapper is returned.

use tracing::{error, info, warn};

use super::types::{DocumentWrapper, SimRepresentation, WindowRepresentation};
use crate::error::{AxidocError, Result};
use crate::nlp::traits::EmbeddingProvider;
use crate::repr::array::{ReprArray, Representations, Scores};
use crate::repr::bow::CountVectorizer;
use crate::repr::builder::{Input, RepresentationBuilder};
use crate::repr::kind::ReprKind;
use crate::repr::similarity::similarity_scores;
use crate::segment::{segment, WindowProp};
use crate::text::normalize::strip_control_chars;

/// Assembles document wrappers using a pair of embedding providers.
pub struct DocumentAssembler<'p> {
    builder: RepresentationBuilder<'p>,
}

impl<'p> DocumentAssembler<'p> {
    pub fn new(glove: &'p dyn EmbeddingProvider, word2vec: &'p dyn EmbeddingProvider) -> Self {
        Self {
            builder: RepresentationBuilder::new(glove, word2vec),
        }
    }

    /// Represent, segment and score `text` against `comparison_text`.
    pub fn build(
        &self,
        text: Option<&str>,
        comparison_text: Option<&str>,
        window_prop: &WindowProp,
    ) -> Result<DocumentWrapper> {
        let (Some(text), Some(comparison_text)) = (text, comparison_text) else {
            error!(
                text = text.is_some(),
                comparison = comparison_text.is_some(),
                "Text or comparison text is missing"
            );
            return Err(AxidocError::MissingInput(
                "both a text and a comparison text are required".to_string(),
            ));
        };

        let text = strip_control_chars(text);
        let comparison_text = strip_control_chars(comparison_text);

        let vectorizer = fit_vocabulary(&text, &comparison_text);

        let glove_doc = self.builder.glove().tokenize(&text)?;
        let word2vec_doc = self.builder.word2vec().tokenize(&text)?;

        let target = self
            .builder
            .represent_documents(&glove_doc, &word2vec_doc, &vectorizer);
        let comparison = self
            .builder
            .represent(Input::Text(&comparison_text), &vectorizer)?;
        let doc_scores = similarity_scores(&target, &comparison);

        let mut windows: [Vec<WindowRepresentation>; 3] = Default::default();

        if window_prop.is_unset() {
            warn!("No window properties set, the whole document is a single window");
            let pos = (0, glove_doc.char_len());
            for (slot, kind) in windows.iter_mut().zip(ReprKind::ALL) {
                slot.push(WindowRepresentation::new(
                    target.get(kind).clone(),
                    pos,
                    doc_scores.get(kind),
                ));
            }
        } else {
            for window in segment(&glove_doc, window_prop)? {
                let reprs = self.builder.represent_span(window.content, &vectorizer);
                let scores = similarity_scores(&reprs, &comparison);
                push_window(&mut windows, reprs, &scores, window.pos());
            }
        }

        info!(
            tokens = glove_doc.len(),
            windows = windows[0].len(),
            vocabulary = vectorizer.vocabulary_len(),
            "Built document wrapper"
        );

        let [bow, glove, word2vec] = sim_representations(target, comparison, &doc_scores, windows);
        Ok(DocumentWrapper::new(
            glove_doc,
            Some(bow),
            Some(glove),
            Some(word2vec),
            *window_prop,
        )
        .with_vocabulary(vectorizer))
    }
}

/// Build a wrapper without keeping an assembler around.
pub fn build_document_wrapper(
    glove: &dyn EmbeddingProvider,
    word2vec: &dyn EmbeddingProvider,
    text: Option<&str>,
    comparison_text: Option<&str>,
    window_prop: &WindowProp,
) -> Result<DocumentWrapper> {
    DocumentAssembler::new(glove, word2vec).build(text, comparison_text, window_prop)
}

/// Fit the BoW vocabulary shared by a target and its comparison text.
///
/// When the pair has no terms at all the vectorizer stays unfitted and every
/// BoW vector comes out empty.
pub fn fit_vocabulary(text: &str, comparison_text: &str) -> CountVectorizer {
    let mut vectorizer = CountVectorizer::new();
    if let Err(e) = vectorizer.fit(&[text, comparison_text]) {
        warn!(error = %e, "Could not fit BoW vocabulary, BoW vectors will be empty");
    }
    vectorizer
}

fn push_window(
    windows: &mut [Vec<WindowRepresentation>; 3],
    reprs: Representations,
    scores: &Scores,
    pos: (usize, usize),
) {
    for ((slot, kind), arr) in windows
        .iter_mut()
        .zip(ReprKind::ALL)
        .zip(reprs.into_arrays())
    {
        slot.push(WindowRepresentation::new(arr, pos, scores.get(kind)));
    }
}

fn sim_representations(
    target: Representations,
    comparison: Representations,
    doc_scores: &Scores,
    windows: [Vec<WindowRepresentation>; 3],
) -> [SimRepresentation; 3] {
    let [bow_windows, glove_windows, word2vec_windows] = windows;
    let sim = |kind: ReprKind, doc: ReprArray, cmp: ReprArray, w: Vec<WindowRepresentation>| {
        SimRepresentation::new(kind, doc, Some(cmp), w, doc_scores.get(kind))
    };

    [
        sim(ReprKind::Bow, target.bow, comparison.bow, bow_windows),
        sim(ReprKind::Glove, target.glove, comparison.glove, glove_windows),
        sim(
            ReprKind::Word2Vec,
            target.word2vec,
            comparison.word2vec,
            word2vec_windows,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::provider::StaticEmbeddingProvider;
    use crate::nlp::stopwords::StopwordFilter;
    use crate::nlp::vectors::StaticVectors;

    fn provider(name: &str) -> StaticEmbeddingProvider {
        let vectors = StaticVectors::from_entries([
            ("honesty", vec![1.0, 0.0]),
            ("rain", vec![0.0, 1.0]),
        ])
        .unwrap();
        StaticEmbeddingProvider::new(name, vectors).with_stopwords(StopwordFilter::empty())
    }

    #[test]
    fn test_missing_input_is_rejected() {
        let (g, w) = (provider("glove"), provider("word2vec"));
        let assembler = DocumentAssembler::new(&g, &w);
        let err = assembler
            .build(None, Some("honesty"), &WindowProp::default())
            .unwrap_err();
        assert!(matches!(err, AxidocError::MissingInput(_)));
        assert!(assembler
            .build(Some("honesty"), None, &WindowProp::default())
            .is_err());
    }

    #[test]
    fn test_unset_prop_yields_whole_document_window() {
        let (g, w) = (provider("glove"), provider("word2vec"));
        let wrapper = build_document_wrapper(
            &g,
            &w,
            Some("honesty rain"),
            Some("honesty"),
            &WindowProp::unset(),
        )
        .unwrap();

        for kind in ReprKind::ALL {
            let sim = wrapper.get(kind).unwrap();
            assert_eq!(sim.window_repr().len(), 1);
            let only = &sim.window_repr()[0];
            assert_eq!(only.pos(), (0, 12));
            assert_eq!(only.similarity_score(), sim.doc_score());
            assert_eq!(only.arr(), sim.doc_representation());
        }
    }

    #[test]
    fn test_control_characters_are_stripped() {
        let (g, w) = (provider("glove"), provider("word2vec"));
        let wrapper = build_document_wrapper(
            &g,
            &w,
            Some("honesty\u{0}rain"),
            Some("honesty"),
            &WindowProp::unset(),
        )
        .unwrap();
        assert_eq!(wrapper.doc().text(), "honestyrain");
    }

    #[test]
    fn test_wrapper_keeps_fitted_vocabulary() {
        let (g, w) = (provider("glove"), provider("word2vec"));
        let wrapper = build_document_wrapper(
            &g,
            &w,
            Some("honesty rain"),
            Some("honesty matters"),
            &WindowProp::unset(),
        )
        .unwrap();

        let vocabulary = wrapper.vocabulary();
        assert_eq!(vocabulary.vocabulary_len(), 3);
        let bow = wrapper.get(ReprKind::Bow).unwrap();
        let ReprArray::Counts(counts) = bow.doc_representation() else {
            panic!("BoW representation should be counts");
        };
        assert_eq!(
            vocabulary.top_terms(counts, 5),
            vec![("honesty".to_string(), 1.0), ("rain".to_string(), 1.0)]
        );
    }
}
