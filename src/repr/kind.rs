// The three representation kinds compared by the analysis.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AxidocError;

/// A text representation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReprKind {
    /// Bag-of-words term counts.
    Bow,
    /// Mean-pooled GloVe-style vectors.
    Glove,
    /// Mean-pooled Word2Vec-style vectors.
    Word2Vec,
}

impl ReprKind {
    /// All kinds, in the order results are reported.
    pub const ALL: [ReprKind; 3] = [ReprKind::Bow, ReprKind::Glove, ReprKind::Word2Vec];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReprKind::Bow => "bow",
            ReprKind::Glove => "glove",
            ReprKind::Word2Vec => "word2vec",
        }
    }

    /// Whether the representation is a token matrix that must be mean-pooled.
    pub fn is_embedding(&self) -> bool {
        !matches!(self, ReprKind::Bow)
    }
}

impl fmt::Display for ReprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReprKind {
    type Err = AxidocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bow" => Ok(ReprKind::Bow),
            "glove" => Ok(ReprKind::Glove),
            "word2vec" => Ok(ReprKind::Word2Vec),
            other => Err(AxidocError::InvalidArgument(format!(
                "unknown representation '{other}'; choose from 'bow', 'glove', 'word2vec'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip_names() {
        for kind in ReprKind::ALL {
            assert_eq!(kind.as_str().parse::<ReprKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_name_is_invalid_argument() {
        let err = "tfidf".parse::<ReprKind>().unwrap_err();
        assert!(matches!(err, AxidocError::InvalidArgument(_)));
        assert!(err.to_string().contains("tfidf"));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!("BOW".parse::<ReprKind>().is_err());
    }
}
