//! File handle passed to tests and returned as a match.

use std::path::{Path, PathBuf};

/// A file or directory reached by a search.
///
/// Holds the path as it was reached (a root as given, joined with
/// directory entry names) plus the name parts tests usually compare
/// against. Contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VFile {
    /// Path as reached.
    path: PathBuf,

    /// Last component of the path.
    basename: String,

    /// Basename without its extension.
    stem: String,

    /// Extension with its leading dot, e.g. `.md`.
    extname: String,
}

impl VFile {
    /// Creates a handle for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let basename = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let extname = path
            .extension()
            .map(|s| format!(".{}", s.to_string_lossy()))
            .unwrap_or_default();

        Self {
            path,
            basename,
            stem,
            extname,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn basename(&self) -> &str {
        &self.basename
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Extension including the leading `.`, or empty.
    pub fn extname(&self) -> &str {
        &self.extname
    }

    /// Parent of the path, or an empty path at the top.
    pub fn dirname(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

impl AsRef<Path> for VFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl From<VFile> for PathBuf {
    fn from(file: VFile) -> Self {
        file.path
    }
}
