// Error taxonomy for the analysis core.
//
// Only some of these are fatal. Vectorization failures are recovered inside
// the representation builder, and an undefined similarity is carried as a
// `None` score rather than an error.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or ranking a document wrapper.
#[derive(Debug, Error)]
pub enum AxidocError {
    /// A required text (target or comparison) was not supplied.
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// The BoW vectorizer was not fit, or the text produced no terms.
    #[error("Vectorization error: {0}")]
    Vectorization(String),

    /// Windowing failed; no partial window list is returned.
    #[error("Segmentation error: {0}")]
    Segmentation(String),

    /// The caller passed a value outside the accepted set.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The embedding provider failed to tokenize or vectorize text.
    #[error("Embedding error ({provider}): {message}")]
    Embedding {
        /// Name of the provider that failed.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// A static vector table could not be parsed.
    #[error("Failed to load vectors from {}: {message}", path.display())]
    VectorLoad {
        /// Path of the table being read.
        path: PathBuf,
        /// A description of the failure.
        message: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A convenience result type for analysis operations.
pub type Result<T> = std::result::Result<T, AxidocError>;
