// Tokenized document produced by an embedding provider.
//
// A Document owns its tokens and sentence boundaries. Sub-ranges are exposed
// as `Span`s that borrow the parent, so windows never copy token data.

use std::ops::Range;

/// A single token with its flags and embedding vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Verbatim token text.
    pub text: String,
    /// Character offset of the token's first character in the document text.
    pub idx: usize,
    /// Whether the lowercased text is an English stop word.
    pub is_stop: bool,
    /// Whether every character is alphabetic.
    pub is_alpha: bool,
    /// Whether the token is a run of whitespace.
    pub is_space: bool,
    /// Embedding vector; all zeros when the text is out of vocabulary.
    pub vector: Vec<f32>,
}

impl Token {
    /// Length of the token in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Character offset one past the token's last character.
    pub fn end_char(&self) -> usize {
        self.idx + self.char_len()
    }
}

/// A tokenized document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    text: String,
    tokens: Vec<Token>,
    sentences: Vec<Range<usize>>,
}

impl Document {
    /// Assemble a document from tokens and sentence token-ranges.
    ///
    /// Sentence ranges are expected to be ordered and to lie within
    /// `0..tokens.len()`; ranges that do not are dropped.
    pub fn new(text: String, tokens: Vec<Token>, sentences: Vec<Range<usize>>) -> Self {
        let len = tokens.len();
        let sentences = sentences
            .into_iter()
            .filter(|r| r.start < r.end && r.end <= len)
            .collect();
        Self {
            text,
            tokens,
            sentences,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Length of the document text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Borrow tokens `range` as a span, or `None` if the range is out of bounds.
    pub fn span(&self, range: Range<usize>) -> Option<Span<'_>> {
        if range.start > range.end || range.end > self.tokens.len() {
            return None;
        }
        Some(Span {
            doc: self,
            start: range.start,
            end: range.end,
        })
    }

    /// The whole document as a span.
    pub fn as_span(&self) -> Span<'_> {
        Span {
            doc: self,
            start: 0,
            end: self.tokens.len(),
        }
    }

    /// Sentences in document order.
    pub fn sents(&self) -> impl Iterator<Item = Span<'_>> + '_ {
        self.sentences.iter().map(move |r| Span {
            doc: self,
            start: r.start,
            end: r.end,
        })
    }

    /// Slice of the document text between two character offsets.
    pub fn slice_chars(&self, start: usize, end: usize) -> String {
        self.text
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }
}

/// A contiguous token range borrowed from a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Span<'a> {
    doc: &'a Document,
    start: usize,
    end: usize,
}

impl<'a> Span<'a> {
    pub fn doc(&self) -> &'a Document {
        self.doc
    }

    pub fn tokens(&self) -> &'a [Token] {
        &self.doc.tokens[self.start..self.end]
    }

    /// Token index of the first token.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Token index one past the last token.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Character offset where the span starts. Empty spans report the offset
    /// of the token they would start at (or the document end).
    pub fn start_char(&self) -> usize {
        match self.tokens().first() {
            Some(token) => token.idx,
            None => self
                .doc
                .tokens
                .get(self.start)
                .map(|t| t.idx)
                .unwrap_or_else(|| self.doc.char_len()),
        }
    }

    /// Character offset one past the span's last character.
    pub fn end_char(&self) -> usize {
        match self.tokens().last() {
            Some(token) => token.end_char(),
            None => self.start_char(),
        }
    }

    /// Token texts joined with single spaces, the form fed to the BoW vectorizer.
    pub fn joined_text(&self) -> String {
        self.tokens()
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str, idx: usize) -> Token {
        Token {
            text: text.to_string(),
            idx,
            is_stop: false,
            is_alpha: text.chars().all(char::is_alphabetic),
            is_space: text.trim().is_empty(),
            vector: vec![0.0; 2],
        }
    }

    fn sample() -> Document {
        // "Hi there. Bye"
        Document::new(
            "Hi there. Bye".to_string(),
            vec![
                token("Hi", 0),
                token("there", 3),
                token(".", 8),
                token("Bye", 10),
            ],
            vec![0..3, 3..4],
        )
    }

    #[test]
    fn test_span_char_offsets() {
        let doc = sample();
        let span = doc.span(1..3).unwrap();
        assert_eq!(span.start_char(), 3);
        assert_eq!(span.end_char(), 9);
        assert_eq!(span.joined_text(), "there .");
    }

    #[test]
    fn test_span_out_of_bounds() {
        let doc = sample();
        assert!(doc.span(2..9).is_none());
        assert!(doc.span(3..2).is_none());
    }

    #[test]
    fn test_sentences() {
        let doc = sample();
        let sents: Vec<_> = doc.sents().map(|s| (s.start_char(), s.end_char())).collect();
        assert_eq!(sents, vec![(0, 9), (10, 13)]);
    }

    #[test]
    fn test_invalid_sentence_ranges_dropped() {
        let doc = Document::new("x".to_string(), vec![token("x", 0)], vec![0..1, 1..5]);
        assert_eq!(doc.sents().count(), 1);
    }

    #[test]
    fn test_slice_chars_multibyte() {
        let doc = Document::new("café au lait".to_string(), vec![], vec![]);
        assert_eq!(doc.slice_chars(0, 4), "café");
        assert_eq!(doc.char_len(), 12);
    }

    #[test]
    fn test_empty_span_positions() {
        let doc = sample();
        let span = doc.span(4..4).unwrap();
        assert!(span.is_empty());
        assert_eq!(span.start_char(), 13);
        assert_eq!(span.end_char(), 13);
    }
}
