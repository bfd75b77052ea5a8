// Token-level NLP: documents, tokenization, stop words and word vectors.

pub mod document;
pub mod provider;
pub mod stopwords;
pub mod tokenizer;
pub mod traits;
pub mod vectors;

use document::Document;

/// Lowercased content words of a document: alphabetic, not a stop word, and
/// longer than three characters. Used for term listings in reports.
pub fn content_terms(doc: &Document) -> Vec<String> {
    doc.tokens()
        .iter()
        .filter(|t| t.is_alpha && !t.is_stop && t.char_len() > 3)
        .map(|t| t.text.to_lowercase())
        .collect()
}
