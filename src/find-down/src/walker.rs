//! Recursive, concurrent visit of one path and everything below it.

use std::path::PathBuf;

use futures::FutureExt;
use futures::future::{BoxFuture, join_all};

use crate::error::FindError;
use crate::file::VFile;
use crate::state::SearchState;

/// Visits every path concurrently and concatenates their matches in the
/// order the paths were given.
pub(crate) async fn visit_all(state: &SearchState, paths: Vec<PathBuf>) -> Vec<VFile> {
    let branches = paths.into_iter().map(|path| visit(state, path));
    join_all(branches).await.into_iter().flatten().collect()
}

/// Visits `path`: evaluates the test against it, then descends unless the
/// outcome, the file type, or termination says otherwise.
pub(crate) fn visit(state: &SearchState, path: PathBuf) -> BoxFuture<'_, Vec<VFile>> {
    async move {
        if state.is_terminated() {
            return Vec::new();
        }

        let resolved = state.resolve(&path);
        if !state.mark_visited(resolved.clone()) {
            tracing::trace!("Already visited '{}'", resolved.display());
            return Vec::new();
        }

        let Some(metadata) = state.stat(&resolved).await else {
            return Vec::new();
        };
        if state.is_terminated() {
            return Vec::new();
        }

        let file = VFile::new(path);
        let outcome = match (state.predicate)(&file, &metadata) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!("Test failed on '{}', aborting search", file.path().display());
                state.fail(FindError::predicate(file.into_path(), e));
                return Vec::new();
            }
        };

        let path = file.path().to_path_buf();
        let mut results = Vec::new();

        if outcome.include {
            if state.wants_first() {
                // Losing the claim means another branch already holds the
                // only result.
                if state.claim_first() {
                    tracing::debug!("First match '{}'", path.display());
                    results.push(file);
                }
                return results;
            }
            results.push(file);
        }

        if outcome.stop && state.terminate() {
            tracing::debug!("Search stopped at '{}'", path.display());
        }

        if state.is_terminated() || !metadata.is_dir() || outcome.skip {
            return results;
        }

        let children = state
            .read_dir(&resolved)
            .await
            .into_iter()
            .map(|name| path.join(name))
            .collect();

        results.extend(visit_all(state, children).await);
        results
    }
    .boxed()
}
