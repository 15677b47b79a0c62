//! Searching from one or more roots.

use std::time::Instant;

use tokio::task::JoinHandle;

use crate::config::FindOptions;
use crate::error::FindResult;
use crate::file::VFile;
use crate::matcher::Test;
use crate::outcome::FindMode;
use crate::roots::Roots;
use crate::state::SearchState;
use crate::walker::visit_all;

/// Downward file finder.
///
/// Each call gets its own search state, so concurrent calls on one finder
/// never interfere.
///
/// # Example
///
/// ```no_run
/// use find_down::{FindDown, FindOptions};
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let finder = FindDown::with_options(FindOptions::builder().max_concurrency(16).build());
///
///     let readmes = finder.find_all([".md", "Cargo.toml"], ["docs", "src"]).await?;
///     for file in readmes {
///         println!("{}", file.path().display());
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FindDown {
    options: FindOptions,
}

impl FindDown {
    /// Creates a finder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a finder with the specified options.
    pub fn with_options(options: FindOptions) -> Self {
        Self { options }
    }

    /// Returns the current options.
    pub fn options(&self) -> &FindOptions {
        &self.options
    }

    /// Finds the first file or directory accepted by `test`.
    ///
    /// Returns `Ok(None)` when nothing matches, including when no root
    /// exists.
    pub async fn find_first(
        &self,
        test: impl Into<Test>,
        roots: impl Into<Roots>,
    ) -> FindResult<Option<VFile>> {
        let files = self.find(test.into(), roots.into(), FindMode::First).await?;
        Ok(files.into_iter().next())
    }

    /// Finds every file or directory accepted by `test`.
    ///
    /// Matches are grouped by root, in the order the roots were given.
    pub async fn find_all(
        &self,
        test: impl Into<Test>,
        roots: impl Into<Roots>,
    ) -> FindResult<Vec<VFile>> {
        self.find(test.into(), roots.into(), FindMode::All).await
    }

    /// Runs [`find_first`](Self::find_first) on the current tokio runtime
    /// and hands the result to `callback`.
    pub fn find_first_with<F>(
        &self,
        test: impl Into<Test>,
        roots: impl Into<Roots>,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(FindResult<Option<VFile>>) + Send + 'static,
    {
        let finder = self.clone();
        let test = test.into();
        let roots = roots.into();
        tokio::spawn(async move {
            callback(finder.find_first(test, roots).await);
        })
    }

    /// Runs [`find_all`](Self::find_all) on the current tokio runtime and
    /// hands the result to `callback`.
    pub fn find_all_with<F>(
        &self,
        test: impl Into<Test>,
        roots: impl Into<Roots>,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(FindResult<Vec<VFile>>) + Send + 'static,
    {
        let finder = self.clone();
        let test = test.into();
        let roots = roots.into();
        tokio::spawn(async move {
            callback(finder.find_all(test, roots).await);
        })
    }

    async fn find(&self, test: Test, roots: Roots, mode: FindMode) -> FindResult<Vec<VFile>> {
        let start = Instant::now();
        // Absolute roots only ever produce absolute children.
        let cwd = if roots.needs_cwd() {
            self.options.resolve_cwd()?
        } else {
            self.options.cwd.clone().unwrap_or_default()
        };
        let roots = roots.resolve(&cwd);

        tracing::debug!(
            "Searching for {} from {} root(s)",
            mode.description(),
            roots.len()
        );

        let predicate = test.compile(&self.options);
        let state = SearchState::new(predicate, mode, cwd, &self.options);

        let files = visit_all(&state, roots).await;

        if let Some(failure) = state.take_failure() {
            return Err(failure);
        }

        tracing::debug!(
            "Found {} match(es) after visiting {} path(s) in {}ms",
            files.len(),
            state.visited_count(),
            start.elapsed().as_millis()
        );

        Ok(files)
    }
}

/// Finds the first file or directory below `roots` accepted by `test`.
///
/// ```no_run
/// # async fn example() -> find_down::FindResult<()> {
/// let manifest = find_down::find_down("Cargo.toml", ()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn find_down(
    test: impl Into<Test>,
    roots: impl Into<Roots>,
) -> FindResult<Option<VFile>> {
    FindDown::default().find_first(test, roots).await
}

/// Finds every file or directory below `roots` accepted by `test`.
pub async fn find_down_all(
    test: impl Into<Test>,
    roots: impl Into<Roots>,
) -> FindResult<Vec<VFile>> {
    FindDown::default().find_all(test, roots).await
}

/// Callback form of [`find_down`]. Must be called within a tokio runtime.
pub fn find_down_with<F>(
    test: impl Into<Test>,
    roots: impl Into<Roots>,
    callback: F,
) -> JoinHandle<()>
where
    F: FnOnce(FindResult<Option<VFile>>) + Send + 'static,
{
    FindDown::default().find_first_with(test, roots, callback)
}

/// Callback form of [`find_down_all`]. Must be called within a tokio runtime.
pub fn find_down_all_with<F>(
    test: impl Into<Test>,
    roots: impl Into<Roots>,
    callback: F,
) -> JoinHandle<()>
where
    F: FnOnce(FindResult<Vec<VFile>>) + Send + 'static,
{
    FindDown::default().find_all_with(test, roots, callback)
}
