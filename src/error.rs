//! Fatal errors raised while building a pack.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that aborts a run. Non-UTF-8 content is not an error; it is
/// reported as [`crate::domain::FileContent::NonText`].
#[derive(Debug, Error)]
pub enum PackError {
    #[error("No such file: {pattern}")]
    NotFound { pattern: String },

    #[error("Invalid glob pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("No files matched the given patterns")]
    NoFilesResolved,

    #[error("Input files share no common directory (different filesystem roots?)")]
    NoCommonAncestor,

    #[error("Failed to read file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output to {target}")]
    Write {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

pub type PackResult<T> = std::result::Result<T, PackError>;
