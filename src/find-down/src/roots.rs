//! Places a search starts from.

use std::path::{Path, PathBuf};

/// Starting points for a search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Roots {
    /// The current directory (or [`crate::FindOptions::cwd`]).
    #[default]
    CurrentDir,

    /// Explicit roots, searched concurrently; their matches are
    /// concatenated in this order. An empty list searches nothing.
    Paths(Vec<PathBuf>),
}

impl Roots {
    /// Returns the root paths, with `cwd` standing in for the default.
    pub fn resolve(self, cwd: &Path) -> Vec<PathBuf> {
        match self {
            Self::CurrentDir => vec![cwd.to_path_buf()],
            Self::Paths(paths) => paths,
        }
    }

    /// Returns `true` if resolving these roots depends on the current
    /// directory: the default root, or any relative path.
    pub fn needs_cwd(&self) -> bool {
        match self {
            Self::CurrentDir => true,
            Self::Paths(paths) => paths.iter().any(|p| p.is_relative()),
        }
    }

    /// Number of roots the search starts from.
    pub fn len(&self) -> usize {
        match self {
            Self::CurrentDir => 1,
            Self::Paths(paths) => paths.len(),
        }
    }

    /// Returns `true` for an explicitly empty root list.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<()> for Roots {
    fn from((): ()) -> Self {
        Self::CurrentDir
    }
}

impl From<&str> for Roots {
    fn from(path: &str) -> Self {
        Self::Paths(vec![PathBuf::from(path)])
    }
}

impl From<String> for Roots {
    fn from(path: String) -> Self {
        Self::Paths(vec![PathBuf::from(path)])
    }
}

impl From<&Path> for Roots {
    fn from(path: &Path) -> Self {
        Self::Paths(vec![path.to_path_buf()])
    }
}

impl From<PathBuf> for Roots {
    fn from(path: PathBuf) -> Self {
        Self::Paths(vec![path])
    }
}

impl From<&PathBuf> for Roots {
    fn from(path: &PathBuf) -> Self {
        Self::Paths(vec![path.clone()])
    }
}

impl<P: Into<PathBuf>> From<Vec<P>> for Roots {
    fn from(paths: Vec<P>) -> Self {
        Self::Paths(paths.into_iter().map(Into::into).collect())
    }
}

impl<P: Into<PathBuf>, const N: usize> From<[P; N]> for Roots {
    fn from(paths: [P; N]) -> Self {
        Self::Paths(paths.into_iter().map(Into::into).collect())
    }
}

impl<P: AsRef<Path>> From<&[P]> for Roots {
    fn from(paths: &[P]) -> Self {
        Self::Paths(paths.iter().map(|p| p.as_ref().to_path_buf()).collect())
    }
}

impl<R: Into<Roots>> From<Option<R>> for Roots {
    fn from(roots: Option<R>) -> Self {
        roots.map(Into::into).unwrap_or_default()
    }
}
