// Bag-of-words count vectorizer.
//
// Fitted once per analysis over the target and the comparison text together,
// so both documents (and every window) map into the same term space with the
// same dimensionality. Terms are lowercased alphanumeric runs of at least two
// characters; vocabulary indices follow alphabetical term order.

use std::collections::BTreeMap;

use crate::error::{AxidocError, Result};

/// Term-count vectorizer with a jointly fitted vocabulary.
#[derive(Debug, Clone, Default)]
pub struct CountVectorizer {
    vocabulary: Option<BTreeMap<String, usize>>,
}

impl CountVectorizer {
    /// An unfitted vectorizer. `transform` fails until `fit` is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit the vocabulary over `docs`, replacing any previous vocabulary.
    ///
    /// Fails if the documents contain no terms at all.
    pub fn fit<S: AsRef<str>>(&mut self, docs: &[S]) -> Result<()> {
        let mut terms: Vec<String> = docs.iter().flat_map(|d| analyze(d.as_ref())).collect();
        terms.sort();
        terms.dedup();

        if terms.is_empty() {
            return Err(AxidocError::Vectorization(
                "empty vocabulary; documents contain no terms".to_string(),
            ));
        }

        self.vocabulary = Some(
            terms
                .into_iter()
                .enumerate()
                .map(|(i, term)| (term, i))
                .collect(),
        );
        Ok(())
    }

    pub fn is_fitted(&self) -> bool {
        self.vocabulary.is_some()
    }

    /// Number of terms in the vocabulary (0 when unfitted).
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.as_ref().map_or(0, BTreeMap::len)
    }

    /// Count vector of `text` over the fitted vocabulary.
    ///
    /// Fails when the vectorizer is unfitted or `text` has no terms.
    /// Terms outside the vocabulary are ignored.
    pub fn transform(&self, text: &str) -> Result<Vec<f64>> {
        let vocabulary = self.vocabulary.as_ref().ok_or_else(|| {
            AxidocError::Vectorization("vectorizer has not been fit".to_string())
        })?;

        let terms = analyze(text);
        if terms.is_empty() {
            return Err(AxidocError::Vectorization(
                "text contains no terms".to_string(),
            ));
        }

        let mut counts = vec![0.0; vocabulary.len()];
        for term in terms {
            if let Some(&i) = vocabulary.get(&term) {
                counts[i] += 1.0;
            }
        }
        Ok(counts)
    }

    /// The `n` most frequent vocabulary terms in `counts`, highest first.
    /// Ties keep alphabetical order; zero counts are skipped.
    pub fn top_terms(&self, counts: &[f64], n: usize) -> Vec<(String, f64)> {
        let Some(vocabulary) = self.vocabulary.as_ref() else {
            return Vec::new();
        };

        let mut ranked: Vec<(String, f64)> = vocabulary
            .iter()
            .filter_map(|(term, &i)| {
                counts
                    .get(i)
                    .filter(|&&c| c > 0.0)
                    .map(|&c| (term.clone(), c))
            })
            .collect();

        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(n);
        ranked
    }
}

/// Split text into lowercased terms of two or more alphanumeric characters.
fn analyze(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_lowercase)
        .collect()
}
