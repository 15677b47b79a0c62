//! State shared by every branch of one search.

use std::ffi::OsString;
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use dashmap::DashSet;
use parking_lot::Mutex;
use path_absolutize::Absolutize;
use tokio::sync::Semaphore;

use crate::config::FindOptions;
use crate::error::FindError;
use crate::matcher::Predicate;
use crate::outcome::FindMode;

/// Per-search state, owned by one `find` call and borrowed by its branches.
pub(crate) struct SearchState {
    /// Compiled test.
    pub(crate) predicate: Predicate,

    /// Whether the search stops at its first match.
    mode: FindMode,

    /// Base for relative paths.
    cwd: PathBuf,

    /// Whether stat follows symbolic links.
    follow_symlinks: bool,

    /// Absolute paths already dispatched. Entries are never removed.
    visited: DashSet<PathBuf>,

    /// Set once when the search should start no new work.
    terminated: AtomicBool,

    /// Bound on in-flight stat/readdir calls.
    limiter: Option<Semaphore>,

    /// First predicate failure; aborts the search.
    failure: Mutex<Option<FindError>>,
}

impl SearchState {
    pub(crate) fn new(
        predicate: Predicate,
        mode: FindMode,
        cwd: PathBuf,
        options: &FindOptions,
    ) -> Self {
        Self {
            predicate,
            mode,
            cwd,
            follow_symlinks: options.follow_symlinks,
            visited: DashSet::new(),
            terminated: AtomicBool::new(false),
            limiter: options.max_concurrency.map(|n| Semaphore::new(n.max(1))),
            failure: Mutex::new(None),
        }
    }

    pub(crate) fn wants_first(&self) -> bool {
        self.mode == FindMode::First
    }

    /// Absolute, lexically normalised form of `path`.
    pub(crate) fn resolve(&self, path: &Path) -> PathBuf {
        match path.absolutize_from(&self.cwd) {
            Ok(resolved) => resolved.into_owned(),
            Err(_) => self.cwd.join(path),
        }
    }

    /// Records `path` as visited. Returns `false` if it already was.
    pub(crate) fn mark_visited(&self, path: PathBuf) -> bool {
        self.visited.insert(path)
    }

    pub(crate) fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub(crate) fn is_terminated(&self) -> bool {
        self.terminated.load(Ordering::Acquire)
    }

    /// Stops the search. Returns `true` for the call that set the flag.
    pub(crate) fn terminate(&self) -> bool {
        !self.terminated.swap(true, Ordering::AcqRel)
    }

    /// Claims the single result of a first-mode search.
    ///
    /// Terminates the search in the same step, so exactly one branch
    /// ever wins.
    pub(crate) fn claim_first(&self) -> bool {
        self.terminated
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Records a predicate failure and stops the search. Only the first
    /// failure is kept.
    pub(crate) fn fail(&self, error: FindError) {
        {
            let mut failure = self.failure.lock();
            if failure.is_none() {
                *failure = Some(error);
            }
        }
        self.terminate();
    }

    pub(crate) fn take_failure(&self) -> Option<FindError> {
        self.failure.lock().take()
    }

    /// Stats `path`, or `None` if it cannot be stat'd or the search ended
    /// while waiting for a permit.
    pub(crate) async fn stat(&self, path: &Path) -> Option<Metadata> {
        let _permit = match &self.limiter {
            Some(limiter) => Some(limiter.acquire().await.ok()?),
            None => None,
        };
        if self.is_terminated() {
            return None;
        }

        let result = if self.follow_symlinks {
            tokio::fs::metadata(path).await
        } else {
            tokio::fs::symlink_metadata(path).await
        };

        match result {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                tracing::trace!("Cannot stat '{}': {}", path.display(), e);
                None
            }
        }
    }

    /// Lists the entry names of a directory. Unreadable directories list
    /// as empty; a failure partway keeps the names read so far.
    pub(crate) async fn read_dir(&self, path: &Path) -> Vec<OsString> {
        let _permit = match &self.limiter {
            Some(limiter) => match limiter.acquire().await {
                Ok(permit) => Some(permit),
                Err(_) => return Vec::new(),
            },
            None => None,
        };
        if self.is_terminated() {
            return Vec::new();
        }

        let mut entries = match tokio::fs::read_dir(path).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::trace!("Cannot read directory '{}': {}", path.display(), e);
                return Vec::new();
            }
        };

        let mut names = Vec::new();
        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => names.push(entry.file_name()),
                Ok(None) => break,
                Err(e) => {
                    tracing::trace!("Error reading directory '{}': {}", path.display(), e);
                    break;
                }
            }
        }
        names
    }
}
