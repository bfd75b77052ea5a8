// Static word-vector tables (GloVe / word2vec text format).
//
// Both formats are one word per line followed by its components separated by
// whitespace. word2vec text files additionally start with a "<count> <dim>"
// header line, which is detected and used to validate row width.
//
// Tables can be pruned at load time to the first N rows; published tables are
// ordered by frequency, so this keeps the most common words.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{AxidocError, Result};

/// An in-memory word → vector table with a fixed dimension.
#[derive(Debug, Clone, Default)]
pub struct StaticVectors {
    dim: usize,
    table: HashMap<String, Vec<f32>>,
}

impl StaticVectors {
    /// Build a table from in-memory entries. All vectors must share a length.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        let mut vectors = Self::default();
        for (word, vector) in entries {
            vectors.insert(word.into(), vector, None)?;
        }
        Ok(vectors)
    }

    /// Load a table from a GloVe or word2vec text file.
    pub fn load(path: &Path, max_vectors: Option<usize>) -> Result<Self> {
        let file = File::open(path).map_err(|e| AxidocError::VectorLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let vectors = Self::from_reader(BufReader::new(file), path, max_vectors)?;
        debug!(
            path = %path.display(),
            words = vectors.len(),
            dim = vectors.dim(),
            "Loaded static vectors"
        );
        Ok(vectors)
    }

    /// Parse a table from any buffered reader. `path` is only used in errors.
    pub fn from_reader<R: BufRead>(
        reader: R,
        path: &Path,
        max_vectors: Option<usize>,
    ) -> Result<Self> {
        let mut vectors = Self::default();
        let mut first = true;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            if max_vectors.is_some_and(|max| vectors.len() >= max) {
                break;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();

            if first {
                first = false;
                if let Some(dim) = parse_header(&fields) {
                    vectors.dim = dim;
                    continue;
                }
            }

            let (word, components) = split_row(&fields, vectors.dim);
            let vector = components
                .iter()
                .map(|v| v.parse::<f32>())
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(|e| load_error(path, line_no, &format!("bad component: {e}")))?;

            vectors.insert(word, vector, Some((path, line_no)))?;
        }

        Ok(vectors)
    }

    fn insert(
        &mut self,
        word: String,
        vector: Vec<f32>,
        origin: Option<(&Path, usize)>,
    ) -> Result<()> {
        if vector.is_empty() {
            return Err(match origin {
                Some((path, line_no)) => load_error(path, line_no, "row has no components"),
                None => AxidocError::InvalidArgument(format!("empty vector for '{word}'")),
            });
        }
        if vector.iter().any(|c| !c.is_finite()) {
            let message = format!("non-finite component in vector for '{word}'");
            return Err(match origin {
                Some((path, line_no)) => load_error(path, line_no, &message),
                None => AxidocError::InvalidArgument(message),
            });
        }
        if self.dim == 0 {
            self.dim = vector.len();
        } else if vector.len() != self.dim {
            let message = format!(
                "expected {} components for '{word}', found {}",
                self.dim,
                vector.len()
            );
            return Err(match origin {
                Some((path, line_no)) => load_error(path, line_no, &message),
                None => AxidocError::InvalidArgument(message),
            });
        }
        // First occurrence wins, like the frequency-ordered source files
        self.table.entry(word).or_insert(vector);
        Ok(())
    }

    /// Vector for `word`, falling back to its lowercase form.
    pub fn get(&self, word: &str) -> Option<&[f32]> {
        self.table
            .get(word)
            .or_else(|| self.table.get(&word.to_lowercase()))
            .map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Vector dimension (0 for an empty table without a header).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of words in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

fn parse_header(fields: &[&str]) -> Option<usize> {
    let [count, dim] = fields else {
        return None;
    };
    count.parse::<usize>().ok()?;
    dim.parse::<usize>().ok()
}

/// Split a row into its word and components.
///
/// Once the dimension is known, a row with extra leading fields that are not
/// numbers is a word containing spaces (`. . .` in glove.840B): the last
/// `dim` fields are the vector and the rest is the word. Extra numeric fields
/// are left in place so the row fails the width check.
fn split_row<'a>(fields: &[&'a str], dim: usize) -> (String, Vec<&'a str>) {
    if dim > 0 && fields.len() > dim + 1 {
        let split = fields.len() - dim;
        if fields[1..split].iter().any(|f| f.parse::<f32>().is_err()) {
            return (fields[..split].join(" "), fields[split..].to_vec());
        }
    }
    match fields.split_first() {
        Some((word, rest)) => (word.to_string(), rest.to_vec()),
        None => (String::new(), Vec::new()),
    }
}

fn load_error(path: &Path, line_no: usize, message: &str) -> AxidocError {
    AxidocError::VectorLoad {
        path: PathBuf::from(path),
        message: format!("line {}: {message}", line_no + 1),
    }
}
