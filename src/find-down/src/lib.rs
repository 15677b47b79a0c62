#![allow(clippy::missing_errors_doc, clippy::uninlined_format_args)]
//! Find Down - concurrent downward search for files and directories.
//!
//! Walks down from one or more roots, asking a test about every path it
//! reaches. The test decides, per path, whether to include it, whether to
//! skip descending into it, and whether to stop the whole search.
//!
//! # Features
//!
//! - Literal name/extension tests with hidden and `node_modules` pruning
//! - Closure tests returning an [`Outcome`] or `INCLUDE`/`SKIP`/`BREAK` flags
//! - Ordered lists of tests, first decision wins
//! - Many roots searched concurrently, each path visited at most once
//! - First-match and all-matches modes, awaitable or with a callback
//!
//! # Example
//!
//! ```no_run
//! use find_down::{Outcome, Test, find_down, find_down_all};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let docs = find_down_all(".md", "docs").await?;
//!     println!("{} markdown files", docs.len());
//!
//!     let package = find_down(
//!         Test::predicate(|file, _| {
//!             if file.basename() == "package.json" {
//!                 Outcome::INCLUDE
//!             } else if file.basename() == "target" {
//!                 Outcome::SKIP
//!             } else {
//!                 Outcome::NONE
//!             }
//!         }),
//!         ["frontend", "backend"],
//!     )
//!     .await?;
//!     if let Some(file) = package {
//!         println!("{}", file.path().display());
//!     }
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod file;
mod matcher;
mod outcome;
mod roots;
mod search;
mod state;
mod walker;

pub use config::{
    DEFAULT_DEPENDENCY_DIR, DEFAULT_MAX_CONCURRENCY, FindOptions, FindOptionsBuilder,
};
pub use error::{FindError, FindResult};
pub use file::VFile;
pub use matcher::{Predicate, Test, match_name};
pub use outcome::{BREAK, INCLUDE, Outcome, SKIP};
pub use roots::Roots;
pub use search::{FindDown, find_down, find_down_all, find_down_all_with, find_down_with};

/// Re-export anyhow for fallible tests
pub use anyhow;
