//! Error types for downward search operations.

use std::path::PathBuf;

/// Result type alias for search operations.
pub type FindResult<T> = std::result::Result<T, FindError>;

/// Errors that can end a search.
///
/// Paths that cannot be stat'd or listed are not errors: they contribute
/// no matches and the walk carries on.
#[derive(Debug, thiserror::Error)]
pub enum FindError {
    /// The current directory was needed but could not be determined.
    #[error("Failed to determine the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// A fallible test failed while evaluating a path.
    #[error("Test failed on '{path}': {source}")]
    Predicate {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

impl FindError {
    /// Creates a new `Predicate` error.
    pub fn predicate(path: impl Into<PathBuf>, source: impl Into<anyhow::Error>) -> Self {
        Self::Predicate {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Returns the path a failing test was evaluating, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Predicate { path, .. } => Some(path),
            Self::CurrentDir(_) => None,
        }
    }
}
