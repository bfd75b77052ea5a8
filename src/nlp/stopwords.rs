// English stop-word lookup backed by the `stop-words` crate.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// Case-insensitive stop-word set.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    words: HashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// The English list shipped with `stop-words`.
    pub fn english() -> Self {
        let words: Vec<String> = get(LANGUAGE::English);
        Self::from_list(words.iter().map(String::as_str))
    }

    /// A filter that flags nothing.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Build a filter from a custom word list.
    pub fn from_list<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            words: words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_flags_common_words() {
        let filter = StopwordFilter::english();
        assert!(!filter.is_empty());
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("And"));
    }

    #[test]
    fn test_custom_list_is_case_insensitive() {
        let filter = StopwordFilter::from_list(["Foo", "bar"]);
        assert!(filter.is_stopword("FOO"));
        assert!(filter.is_stopword("bar"));
        assert!(!filter.is_stopword("baz"));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_empty_filter() {
        assert!(!StopwordFilter::empty().is_stopword("the"));
    }
}
