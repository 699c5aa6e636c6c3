//! Errors raised while loading or scoring a correspondence.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoreError>;

/// Every error aborts the scoring run. There is no partial result.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// The proposed mapping is not a bijection over `[1, N]`.
    #[error("invalid permutation: {0}")]
    InvalidPermutation(String),

    /// Malformed or inconsistent vertex/edge data, or an empty reference graph.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An input file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScoreError {
    pub fn invalid_permutation(msg: impl Into<String>) -> Self {
        Self::InvalidPermutation(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn source_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }
}
