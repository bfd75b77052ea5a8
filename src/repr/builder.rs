// Builds the three parallel representations of a text or a window.
//
// Raw text is tokenized separately by each provider, since the two vector
// spaces come from different trained vocabularies. An already tokenized span
// (a window of the GloVe-tokenized target) is reused as-is: GloVe rows come
// from the span's own token vectors and Word2Vec rows are looked up for the
// same token texts, so all three kinds describe exactly the same tokens.

use tracing::warn;

use super::array::{ReprArray, Representations};
use super::bow::CountVectorizer;
use crate::error::Result;
use crate::nlp::document::{Document, Span};
use crate::nlp::traits::EmbeddingProvider;

/// What to represent.
#[derive(Debug, Clone, Copy)]
pub enum Input<'a> {
    /// Untokenized text.
    Text(&'a str),
    /// A span of a document tokenized by the GloVe provider.
    Span(Span<'a>),
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<Span<'a>> for Input<'a> {
    fn from(span: Span<'a>) -> Self {
        Input::Span(span)
    }
}

/// Converts inputs into `(bow, glove, word2vec)` representations.
pub struct RepresentationBuilder<'p> {
    glove: &'p dyn EmbeddingProvider,
    word2vec: &'p dyn EmbeddingProvider,
}

impl<'p> RepresentationBuilder<'p> {
    pub fn new(glove: &'p dyn EmbeddingProvider, word2vec: &'p dyn EmbeddingProvider) -> Self {
        Self { glove, word2vec }
    }

    pub fn glove(&self) -> &'p dyn EmbeddingProvider {
        self.glove
    }

    pub fn word2vec(&self) -> &'p dyn EmbeddingProvider {
        self.word2vec
    }

    /// Represent `input` under all three kinds.
    ///
    /// Only tokenization of raw text can fail; BoW vectorization problems
    /// degrade to a zero vector.
    pub fn represent(&self, input: Input<'_>, vectorizer: &CountVectorizer) -> Result<Representations> {
        match input {
            Input::Text(text) => {
                let glove_doc = self.glove.tokenize(text)?;
                let word2vec_doc = self.word2vec.tokenize(text)?;
                Ok(self.represent_documents(&glove_doc, &word2vec_doc, vectorizer))
            }
            Input::Span(span) => Ok(self.represent_span(span, vectorizer)),
        }
    }

    /// Represent a text already tokenized by both providers.
    pub fn represent_documents(
        &self,
        glove_doc: &Document,
        word2vec_doc: &Document,
        vectorizer: &CountVectorizer,
    ) -> Representations {
        let glove_span = glove_doc.as_span();
        Representations {
            bow: ReprArray::Counts(bow_vector(&glove_span, vectorizer)),
            glove: ReprArray::Embeddings(token_rows(&glove_span)),
            word2vec: ReprArray::Embeddings(token_rows(&word2vec_doc.as_span())),
        }
    }

    /// Represent a span of the GloVe-tokenized document.
    pub fn represent_span(&self, span: Span<'_>, vectorizer: &CountVectorizer) -> Representations {
        let word2vec_rows = span
            .tokens()
            .iter()
            .map(|t| self.word2vec.token_vector(&t.text))
            .collect();

        Representations {
            bow: ReprArray::Counts(bow_vector(&span, vectorizer)),
            glove: ReprArray::Embeddings(token_rows(&span)),
            word2vec: ReprArray::Embeddings(word2vec_rows),
        }
    }
}

fn token_rows(span: &Span<'_>) -> Vec<Vec<f32>> {
    span.tokens().iter().map(|t| t.vector.clone()).collect()
}

fn bow_vector(span: &Span<'_>, vectorizer: &CountVectorizer) -> Vec<f64> {
    match vectorizer.transform(&span.joined_text()) {
        Ok(counts) => counts,
        Err(e) => {
            warn!(
                error = %e,
                tokens = span.len(),
                "BoW vectorization failed, substituting a zero vector"
            );
            vec![0.0; vectorizer.vocabulary_len()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::provider::StaticEmbeddingProvider;
    use crate::nlp::vectors::StaticVectors;

    fn providers() -> (StaticEmbeddingProvider, StaticEmbeddingProvider) {
        let glove = StaticVectors::from_entries([
            ("honesty", vec![1.0, 0.0]),
            ("rain", vec![0.0, 1.0]),
        ])
        .unwrap();
        let word2vec = StaticVectors::from_entries([
            ("honesty", vec![0.0, 0.0, 1.0]),
            ("rain", vec![1.0, 0.0, 0.0]),
        ])
        .unwrap();
        (
            StaticEmbeddingProvider::new("glove", glove),
            StaticEmbeddingProvider::new("word2vec", word2vec),
        )
    }

    #[test]
    fn test_text_is_tokenized_per_space() {
        let (g, w) = providers();
        let builder = RepresentationBuilder::new(&g, &w);
        let mut vectorizer = CountVectorizer::new();
        vectorizer.fit(&["honesty rain"]).unwrap();

        let reprs = builder.represent(Input::Text("Honesty rain"), &vectorizer).unwrap();
        assert_eq!(reprs.bow, ReprArray::Counts(vec![1.0, 1.0]));
        assert_eq!(
            reprs.glove,
            ReprArray::Embeddings(vec![vec![1.0, 0.0], vec![0.0, 1.0]])
        );
        assert_eq!(reprs.word2vec.width(), 3);
    }

    #[test]
    fn test_span_reuses_glove_tokens_and_looks_up_word2vec() {
        let (g, w) = providers();
        let builder = RepresentationBuilder::new(&g, &w);
        let mut vectorizer = CountVectorizer::new();
        vectorizer.fit(&["honesty rain"]).unwrap();

        let doc = g.tokenize("Honesty rain").unwrap();
        let span = doc.span(1..2).unwrap();
        let reprs = builder.represent(span.into(), &vectorizer).unwrap();

        assert_eq!(reprs.bow, ReprArray::Counts(vec![0.0, 1.0]));
        assert_eq!(reprs.glove, ReprArray::Embeddings(vec![vec![0.0, 1.0]]));
        assert_eq!(reprs.word2vec, ReprArray::Embeddings(vec![vec![1.0, 0.0, 0.0]]));
    }

    #[test]
    fn test_termless_text_degrades_to_zero_vector() {
        let (g, w) = providers();
        let builder = RepresentationBuilder::new(&g, &w);
        let mut vectorizer = CountVectorizer::new();
        vectorizer.fit(&["honesty rain"]).unwrap();

        let reprs = builder.represent(Input::Text("!?"), &vectorizer).unwrap();
        assert_eq!(reprs.bow, ReprArray::Counts(vec![0.0, 0.0]));
    }

    #[test]
    fn test_unfitted_vectorizer_degrades_to_empty_vector() {
        let (g, w) = providers();
        let builder = RepresentationBuilder::new(&g, &w);
        let reprs = builder
            .represent(Input::Text("honesty"), &CountVectorizer::new())
            .unwrap();
        assert_eq!(reprs.bow, ReprArray::Counts(vec![]));
    }
}
