// Embedding provider trait: the seam between the analysis core and whatever
// NLP toolkit supplies tokens and word vectors.
//
// The core never loads or caches models itself. Callers construct providers
// up front and pass them in by reference; every method takes `&self`, so a
// provider is read-only for the lifetime of an analysis.

use super::document::Document;
use crate::error::Result;

/// Tokenizes text and maps tokens to fixed-length vectors in one vector space.
pub trait EmbeddingProvider: Send + Sync {
    /// Short name used in logs and errors (e.g. "glove").
    fn name(&self) -> &str;

    /// Dimension of every vector this provider returns.
    fn dimensions(&self) -> usize;

    /// Tokenize `text` into a document with flags, vectors and sentences.
    fn tokenize(&self, text: &str) -> Result<Document>;

    /// Vector for a single token text in this provider's space.
    /// Out-of-vocabulary text maps to a zero vector of [`dimensions`](Self::dimensions).
    fn token_vector(&self, text: &str) -> Vec<f32>;
}
