//! Configuration types for downward search.

use std::path::PathBuf;

use crate::error::{FindError, FindResult};

/// Default bound on stat/readdir calls in flight at once.
pub const DEFAULT_MAX_CONCURRENCY: usize = 64;

/// Dependency directory skipped by literal-name tests.
pub const DEFAULT_DEPENDENCY_DIR: &str = "node_modules";

/// Options shared by every search run through a [`crate::FindDown`].
#[derive(Debug, Clone)]
pub struct FindOptions {
    /// Base for relative roots and the default root.
    /// `None` means the process working directory.
    pub cwd: Option<PathBuf>,

    /// Whether to follow symbolic links when stat'ing paths.
    /// Links are neither descended into nor reported as directories when off.
    pub follow_symlinks: bool,

    /// Maximum number of stat/readdir calls in flight.
    /// `None` means unbounded.
    pub max_concurrency: Option<usize>,

    /// Whether literal-name tests skip dot-prefixed entries.
    pub prune_hidden: bool,

    /// Entry names literal-name tests never descend into.
    pub prune_dirs: Vec<String>,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            cwd: None,
            follow_symlinks: true,
            max_concurrency: Some(DEFAULT_MAX_CONCURRENCY),
            prune_hidden: true,
            prune_dirs: vec![DEFAULT_DEPENDENCY_DIR.to_string()],
        }
    }
}

impl FindOptions {
    /// Creates a builder for constructing options.
    pub fn builder() -> FindOptionsBuilder {
        FindOptionsBuilder::new()
    }

    /// Checks if a literal-name test should skip an entry with this basename.
    pub fn should_prune(&self, basename: &str) -> bool {
        if self.prune_hidden && basename.starts_with('.') {
            return true;
        }
        self.prune_dirs.iter().any(|d| d == basename)
    }

    /// Resolves the base directory for relative roots.
    pub fn resolve_cwd(&self) -> FindResult<PathBuf> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => std::env::current_dir().map_err(FindError::CurrentDir),
        }
    }
}

/// Builder for creating `FindOptions` instances.
#[derive(Debug, Default)]
pub struct FindOptionsBuilder {
    options: FindOptions,
}

impl FindOptionsBuilder {
    /// Creates a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base directory for relative roots.
    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.options.cwd = Some(cwd.into());
        self
    }

    /// Sets whether to follow symbolic links.
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.options.follow_symlinks = follow;
        self
    }

    /// Bounds the number of in-flight stat/readdir calls.
    pub fn max_concurrency(mut self, max: usize) -> Self {
        self.options.max_concurrency = Some(max.max(1));
        self
    }

    /// Removes the bound on in-flight stat/readdir calls.
    pub fn unbounded(mut self) -> Self {
        self.options.max_concurrency = None;
        self
    }

    /// Sets whether literal-name tests skip dot-prefixed entries.
    pub fn prune_hidden(mut self, prune: bool) -> Self {
        self.options.prune_hidden = prune;
        self
    }

    /// Sets the entry names literal-name tests never descend into.
    pub fn prune_dirs(mut self, dirs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.options.prune_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a single entry name to skip.
    pub fn add_prune_dir(mut self, dir: impl Into<String>) -> Self {
        self.options.prune_dirs.push(dir.into());
        self
    }

    /// Builds the options.
    pub fn build(self) -> FindOptions {
        self.options
    }
}
