// Embedding provider backed by a static vector table.
//
// Combines the rule-based tokenizer, the English stop-word list and a
// GloVe/word2vec table. Two instances (one per table) give the GloVe-style
// and Word2Vec-style spaces the analysis compares in.

use super::document::{Document, Token};
use super::stopwords::StopwordFilter;
use super::tokenizer::{self, RawToken};
use super::traits::EmbeddingProvider;
use super::vectors::StaticVectors;
use crate::error::{AxidocError, Result};

/// Optional token pre-filtering applied during tokenization.
///
/// Whitespace tokens are always kept so paragraph structure survives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenFilter {
    /// Drop stop words.
    pub drop_stopwords: bool,
    /// Drop word tokens with this many characters or fewer.
    pub max_short_len: Option<usize>,
}

impl TokenFilter {
    fn keeps(&self, token: &Token) -> bool {
        if token.is_space {
            return true;
        }
        if self.drop_stopwords && token.is_stop {
            return false;
        }
        match self.max_short_len {
            Some(max) => token.char_len() > max,
            None => true,
        }
    }
}

/// Provider over an in-memory [`StaticVectors`] table.
pub struct StaticEmbeddingProvider {
    name: String,
    vectors: StaticVectors,
    stopwords: StopwordFilter,
    filter: TokenFilter,
}

impl StaticEmbeddingProvider {
    pub fn new(name: impl Into<String>, vectors: StaticVectors) -> Self {
        Self {
            name: name.into(),
            vectors,
            stopwords: StopwordFilter::english(),
            filter: TokenFilter::default(),
        }
    }

    /// Replace the stop-word list used for `is_stop` flags.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Filter tokens out of every tokenized document.
    pub fn with_filter(mut self, filter: TokenFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn vectors(&self) -> &StaticVectors {
        &self.vectors
    }

    fn make_token(&self, raw: RawToken) -> Token {
        let vector = if raw.is_space {
            vec![0.0; self.vectors.dim()]
        } else {
            self.token_vector(&raw.text)
        };
        let is_alpha = !raw.text.is_empty() && raw.text.chars().all(char::is_alphabetic);
        Token {
            is_stop: !raw.is_space && self.stopwords.is_stopword(&raw.text),
            is_alpha,
            is_space: raw.is_space,
            vector,
            text: raw.text,
            idx: raw.idx,
        }
    }
}

impl EmbeddingProvider for StaticEmbeddingProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn dimensions(&self) -> usize {
        self.vectors.dim()
    }

    fn tokenize(&self, text: &str) -> Result<Document> {
        if self.vectors.is_empty() {
            return Err(AxidocError::Embedding {
                provider: self.name.clone(),
                message: "no word vectors loaded".to_string(),
            });
        }

        let raw = tokenizer::tokenize(text);
        let sentences = tokenizer::sentence_ranges(&raw);
        let tokens: Vec<Token> = raw.into_iter().map(|t| self.make_token(t)).collect();

        if self.filter == TokenFilter::default() {
            return Ok(Document::new(text.to_string(), tokens, sentences));
        }

        // Remap sentence ranges onto the surviving tokens
        let mut new_index = Vec::with_capacity(tokens.len() + 1);
        let mut kept_tokens = Vec::with_capacity(tokens.len());
        for token in tokens {
            new_index.push(kept_tokens.len());
            if self.filter.keeps(&token) {
                kept_tokens.push(token);
            }
        }
        new_index.push(kept_tokens.len());

        let sentences = sentences
            .into_iter()
            .map(|r| new_index[r.start]..new_index[r.end])
            .collect();

        Ok(Document::new(text.to_string(), kept_tokens, sentences))
    }

    fn token_vector(&self, text: &str) -> Vec<f32> {
        match self.vectors.get(text) {
            Some(v) => v.to_vec(),
            None => vec![0.0; self.vectors.dim()],
        }
    }
}
