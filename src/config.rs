use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::nlp::provider::TokenFilter;
use crate::segment::{WindowProp, DEFAULT_WINDOW_SHIFT, DEFAULT_WINDOW_SIZE};

/// Default directory for the vector tables: `<data dir>/axidoc/vectors`.
pub fn default_vectors_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("axidoc")
        .join("vectors")
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// GloVe-format vector table (AXIDOC_GLOVE_VECTORS)
    pub glove_vectors: PathBuf,
    /// Word2Vec-format vector table (AXIDOC_WORD2VEC_VECTORS)
    pub word2vec_vectors: PathBuf,
    /// Keep only the first N rows of each table (AXIDOC_MAX_VECTORS)
    pub max_vectors: Option<usize>,
    /// Directory holding values.txt and objectivity.txt (AXIDOC_DATA_DIR)
    pub data_dir: PathBuf,
    /// Default window size in tokens (AXIDOC_WINDOW_SIZE)
    pub window_size: usize,
    /// Default window shift in tokens (AXIDOC_WINDOW_SHIFT)
    pub window_shift: usize,
    /// Drop stop words before representing text (AXIDOC_DROP_STOPWORDS)
    pub drop_stopwords: bool,
    /// Drop word tokens shorter than this many characters (AXIDOC_MIN_TOKEN_LEN)
    pub min_token_len: Option<usize>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default; numeric variables must parse if set.
    pub fn load() -> Result<Self> {
        let vectors_dir = default_vectors_dir();

        Ok(Self {
            glove_vectors: env::var("AXIDOC_GLOVE_VECTORS")
                .map(PathBuf::from)
                .unwrap_or_else(|_| vectors_dir.join("glove.txt")),
            word2vec_vectors: env::var("AXIDOC_WORD2VEC_VECTORS")
                .map(PathBuf::from)
                .unwrap_or_else(|_| vectors_dir.join("word2vec.txt")),
            max_vectors: parse_var("AXIDOC_MAX_VECTORS")?,
            data_dir: env::var("AXIDOC_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            window_size: parse_var("AXIDOC_WINDOW_SIZE")?.unwrap_or(DEFAULT_WINDOW_SIZE),
            window_shift: parse_var("AXIDOC_WINDOW_SHIFT")?.unwrap_or(DEFAULT_WINDOW_SHIFT),
            drop_stopwords: parse_flag("AXIDOC_DROP_STOPWORDS")?,
            min_token_len: parse_var("AXIDOC_MIN_TOKEN_LEN")?,
        })
    }

    /// Fixed-size windowing with the configured size and shift.
    pub fn window_prop(&self) -> WindowProp {
        WindowProp::fixed(self.window_size, self.window_shift)
    }

    /// Token pre-filtering applied by both embedding providers.
    pub fn token_filter(&self) -> TokenFilter {
        TokenFilter {
            drop_stopwords: self.drop_stopwords,
            max_short_len: self.min_token_len.filter(|&n| n > 1).map(|n| n - 1),
        }
    }

    /// Check that both vector tables exist.
    /// Call this before any operation that builds embeddings.
    pub fn require_vectors(&self) -> Result<()> {
        for (label, var, path) in [
            ("GloVe", "AXIDOC_GLOVE_VECTORS", &self.glove_vectors),
            ("Word2Vec", "AXIDOC_WORD2VEC_VECTORS", &self.word2vec_vectors),
        ] {
            if !path.is_file() {
                anyhow::bail!(
                    "{label} vectors not found at {}\n\
                     Set {var} in your .env file to a text-format vector table\n\
                     (one `word v1 v2 ...` line per word).",
                    path.display()
                );
            }
        }
        Ok(())
    }

    /// Check that the reference data directory exists.
    pub fn require_data_dir(&self) -> Result<()> {
        if !self.data_dir.is_dir() {
            anyhow::bail!(
                "Data directory {} not found.\n\
                 Set AXIDOC_DATA_DIR to the directory holding values.txt and objectivity.txt.",
                self.data_dir.display()
            );
        }
        Ok(())
    }
}

fn parse_var(name: &str) -> Result<Option<usize>> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a non-negative integer, got '{raw}'")),
        Err(_) => Ok(None),
    }
}

fn parse_flag(name: &str) -> Result<bool> {
    let Ok(raw) = env::var(name) else {
        return Ok(false);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => anyhow::bail!("{name} must be true or false, got '{raw}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vectors_dir_is_under_axidoc() {
        let dir = default_vectors_dir();
        let path_str = dir.to_string_lossy();
        assert!(
            path_str.contains("axidoc") && path_str.contains("vectors"),
            "Expected path containing axidoc/vectors, got: {path_str}"
        );
    }

    #[test]
    fn test_missing_vectors_are_reported() {
        let config = Config {
            glove_vectors: PathBuf::from("/nonexistent/glove.txt"),
            word2vec_vectors: PathBuf::from("/nonexistent/word2vec.txt"),
            max_vectors: None,
            data_dir: PathBuf::from("./data"),
            window_size: 20,
            window_shift: 10,
            drop_stopwords: false,
            min_token_len: None,
        };
        let err = config.require_vectors().unwrap_err().to_string();
        assert!(err.contains("AXIDOC_GLOVE_VECTORS"), "got: {err}");
    }

    #[test]
    fn test_window_prop_from_config() {
        let config = Config {
            glove_vectors: PathBuf::new(),
            word2vec_vectors: PathBuf::new(),
            max_vectors: None,
            data_dir: PathBuf::new(),
            window_size: 8,
            window_shift: 4,
            drop_stopwords: false,
            min_token_len: None,
        };
        assert_eq!(config.window_prop(), WindowProp::fixed(8, 4));
        assert_eq!(config.token_filter(), TokenFilter::default());
    }

    #[test]
    fn test_token_filter_from_config() {
        let config = Config {
            glove_vectors: PathBuf::new(),
            word2vec_vectors: PathBuf::new(),
            max_vectors: None,
            data_dir: PathBuf::new(),
            window_size: DEFAULT_WINDOW_SIZE,
            window_shift: DEFAULT_WINDOW_SHIFT,
            drop_stopwords: true,
            min_token_len: Some(3),
        };
        assert_eq!(
            config.token_filter(),
            TokenFilter {
                drop_stopwords: true,
                max_short_len: Some(2),
            }
        );

        let keep_all = Config {
            min_token_len: Some(1),
            ..config
        };
        assert_eq!(keep_all.token_filter().max_short_len, None);
    }

    #[test]
    fn test_defaults_match_window_prop_default() {
        assert_eq!(
            WindowProp::default(),
            WindowProp::fixed(DEFAULT_WINDOW_SIZE, DEFAULT_WINDOW_SHIFT)
        );
    }
}
