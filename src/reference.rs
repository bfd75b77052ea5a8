// Reference statements that documents are compared against.
//
// Two built-in corpora live in the data directory: general statements about
// values in science (`values.txt`) and statements about scientific
// objectivity (`objectivity.txt`). Any other text file can be used as a
// reference as well. Reference text is flattened to a single line.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AxidocError, Result};
use crate::text::normalize::clean_text;

/// A built-in reference corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reference {
    #[default]
    Values,
    Objectivity,
}

impl Reference {
    pub fn file_name(&self) -> &'static str {
        match self {
            Reference::Values => "values.txt",
            Reference::Objectivity => "objectivity.txt",
        }
    }

    pub fn path_in(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Reference::Values => "values",
            Reference::Objectivity => "objectivity",
        })
    }
}

impl FromStr for Reference {
    type Err = AxidocError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "values" => Ok(Reference::Values),
            "objectivity" => Ok(Reference::Objectivity),
            other => Err(AxidocError::InvalidArgument(format!(
                "unknown reference '{other}'; choose from 'values', 'objectivity'"
            ))),
        }
    }
}

/// Load a built-in reference corpus from `data_dir`.
pub fn load_reference(data_dir: &Path, reference: Reference) -> Result<String> {
    load_reference_file(&reference.path_in(data_dir))
}

/// Load any text file as a reference, flattened to one line.
///
/// A file with no text after cleaning is rejected as missing input.
pub fn load_reference_file(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path)?;
    let text = clean_text(&raw).trim().to_string();
    if text.is_empty() {
        return Err(AxidocError::MissingInput(format!(
            "reference file {} contains no text",
            path.display()
        )));
    }
    debug!(path = %path.display(), chars = text.chars().count(), "Loaded reference text");
    Ok(text)
}
