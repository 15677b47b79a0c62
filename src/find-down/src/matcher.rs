//! Tests: what a search looks for, and how each form compiles to one predicate.

use std::fmt;
use std::fs::Metadata;
use std::sync::Arc;

use crate::config::FindOptions;
use crate::file::VFile;
use crate::outcome::Outcome;

/// The canonical form every [`Test`] compiles to.
pub type Predicate = Arc<dyn Fn(&VFile, &Metadata) -> anyhow::Result<Outcome> + Send + Sync>;

/// Things to search for.
///
/// - `Name`: the basename or the extension (with its dot, e.g. `.md`) must
///   equal the literal. Hidden entries and dependency directories are
///   skipped unless they match.
/// - `Predicate`: a closure deciding per path.
/// - `Any`: the first member that makes a decision wins.
#[derive(Clone)]
pub enum Test {
    /// A compiled closure.
    Predicate(Predicate),
    /// A literal basename or extension.
    Name(String),
    /// An ordered list of tests.
    Any(Vec<Test>),
}

impl Test {
    /// Wraps a closure returning anything convertible to an [`Outcome`]:
    /// an `Outcome`, `u8` bit flags, a `bool`, or an `Option<Outcome>`.
    pub fn predicate<F, O>(f: F) -> Self
    where
        F: Fn(&VFile, &Metadata) -> O + Send + Sync + 'static,
        O: Into<Outcome>,
    {
        Self::Predicate(Arc::new(
            move |file: &VFile, metadata: &Metadata| -> anyhow::Result<Outcome> {
                Ok(f(file, metadata).into())
            },
        ))
    }

    /// Wraps a closure that can fail. A failure aborts the search.
    pub fn try_predicate<F, O>(f: F) -> Self
    where
        F: Fn(&VFile, &Metadata) -> anyhow::Result<O> + Send + Sync + 'static,
        O: Into<Outcome>,
    {
        Self::Predicate(Arc::new(
            move |file: &VFile, metadata: &Metadata| -> anyhow::Result<Outcome> {
                f(file, metadata).map(Into::into)
            },
        ))
    }

    /// Matches a basename or extension literally.
    pub fn name(literal: impl Into<String>) -> Self {
        Self::Name(literal.into())
    }

    /// Combines tests; the first one to make a decision wins.
    pub fn any<I, T>(tests: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Test>,
    {
        Self::Any(tests.into_iter().map(Into::into).collect())
    }

    /// Compiles this test into a single predicate.
    pub fn compile(self, options: &FindOptions) -> Predicate {
        match self {
            Self::Predicate(predicate) => predicate,
            Self::Name(literal) => {
                let options = options.clone();
                Arc::new(move |file: &VFile, _: &Metadata| -> anyhow::Result<Outcome> {
                    Ok(match_name(&literal, file, &options))
                })
            }
            Self::Any(tests) => {
                let predicates: Vec<Predicate> =
                    tests.into_iter().map(|t| t.compile(options)).collect();
                Arc::new(move |file: &VFile, metadata: &Metadata| -> anyhow::Result<Outcome> {
                    for predicate in &predicates {
                        let outcome = predicate(file, metadata)?;
                        if !outcome.is_none() {
                            return Ok(outcome);
                        }
                    }
                    Ok(Outcome::NONE)
                })
            }
        }
    }
}

/// Decides a literal-name test for one file.
///
/// A match always wins over pruning, so `.test` finds the hidden file
/// `.test`.
pub fn match_name(literal: &str, file: &VFile, options: &FindOptions) -> Outcome {
    if literal == file.basename() || literal == file.extname() {
        return Outcome::INCLUDE;
    }

    if options.should_prune(file.basename()) {
        return Outcome::SKIP;
    }

    Outcome::NONE
}

impl fmt::Debug for Test {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate(_) => f.write_str("Predicate(..)"),
            Self::Name(literal) => f.debug_tuple("Name").field(literal).finish(),
            Self::Any(tests) => f.debug_tuple("Any").field(tests).finish(),
        }
    }
}

impl From<&str> for Test {
    fn from(literal: &str) -> Self {
        Self::Name(literal.to_string())
    }
}

impl From<String> for Test {
    fn from(literal: String) -> Self {
        Self::Name(literal)
    }
}

impl From<&String> for Test {
    fn from(literal: &String) -> Self {
        Self::Name(literal.clone())
    }
}

impl<T: Into<Test>> From<Vec<T>> for Test {
    fn from(tests: Vec<T>) -> Self {
        Self::any(tests)
    }
}

impl<T: Into<Test>, const N: usize> From<[T; N]> for Test {
    fn from(tests: [T; N]) -> Self {
        Self::any(tests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    fn metadata() -> (TempDir, Metadata) {
        let dir = TempDir::new().unwrap();
        let metadata = std::fs::metadata(dir.path()).unwrap();
        (dir, metadata)
    }

    fn eval(test: impl Into<Test>, path: &str) -> Outcome {
        let (_dir, metadata) = metadata();
        let predicate = test.into().compile(&FindOptions::default());
        predicate(&VFile::new(path), &metadata).unwrap()
    }

    #[test]
    fn test_name_matches_basename_or_extension() {
        assert_eq!(eval("foo.json", "fixture/foo.json"), Outcome::INCLUDE);
        assert_eq!(eval(".json", "fixture/foo.json"), Outcome::INCLUDE);
        assert_eq!(eval("json", "fixture/foo.json"), Outcome::NONE);
        assert_eq!(eval("foo", "fixture/foo.json"), Outcome::NONE);
        assert_eq!(eval(".md", "fixture/foo"), Outcome::NONE);
    }

    #[test]
    fn test_name_prunes_hidden_and_dependencies() {
        assert_eq!(eval(".md", "fixture/.git"), Outcome::SKIP);
        assert_eq!(eval(".md", "fixture/node_modules"), Outcome::SKIP);
        // A literal naming the hidden entry still includes it.
        assert_eq!(eval(".test", "fixture/.test"), Outcome::INCLUDE);
        assert_eq!(eval("node_modules", "a/node_modules"), Outcome::INCLUDE);
    }

    #[test]
    fn test_name_respects_options() {
        let options = FindOptions::builder()
            .prune_hidden(false)
            .prune_dirs(["target"])
            .build();
        let file = VFile::new("x/.git");
        assert_eq!(match_name(".md", &file, &options), Outcome::NONE);
        let file = VFile::new("x/target");
        assert_eq!(match_name(".md", &file, &options), Outcome::SKIP);
        let file = VFile::new("x/node_modules");
        assert_eq!(match_name(".md", &file, &options), Outcome::NONE);
    }

    #[test]
    fn test_any_first_decision_wins() {
        assert_eq!(eval(vec![".md", ".json"], "a/foo.json"), Outcome::INCLUDE);
        assert_eq!(eval(["!", "?"], "a/foo.json"), Outcome::NONE);
        // The hidden entry is skipped by the first member before the
        // second gets a say.
        assert_eq!(eval(vec![".md", ".json"], "a/.hidden"), Outcome::SKIP);
    }

    #[test]
    fn test_any_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let test = Test::any(vec![
            Test::name("foo.json"),
            Test::predicate(move |_, _| {
                counter.fetch_add(1, Ordering::SeqCst);
                false
            }),
        ]);

        assert_eq!(eval(test.clone(), "foo.json"), Outcome::INCLUDE);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(eval(test, "bar.json"), Outcome::NONE);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_any_without_members() {
        assert_eq!(eval(Test::any(Vec::<Test>::new()), "a"), Outcome::NONE);
    }

    #[test]
    fn test_predicate_return_styles() {
        let bits = Test::predicate(|file, _| {
            if file.stem() == "foo" {
                crate::INCLUDE | crate::BREAK
            } else {
                0
            }
        });
        let outcome = eval(bits, "foo.json");
        assert!(outcome.include && outcome.stop);

        let flag = Test::predicate(|file, metadata| metadata.is_dir() && file.basename() == "x");
        assert_eq!(eval(flag, "x"), Outcome::INCLUDE);
    }

    #[test]
    fn test_try_predicate_error_propagates() {
        let (_dir, metadata) = metadata();
        let test = Test::any(vec![
            Test::try_predicate(|_, _| -> anyhow::Result<Outcome> {
                anyhow::bail!("unreadable")
            }),
            Test::name("a"),
        ]);
        let predicate = test.compile(&FindOptions::default());
        let err = predicate(&VFile::new("a"), &metadata).unwrap_err();
        assert!(err.to_string().contains("unreadable"));
    }

    #[test]
    fn test_debug_output() {
        let test = Test::from(vec![Test::name(".md"), Test::predicate(|_, _| true)]);
        assert_eq!(
            format!("{test:?}"),
            r#"Any([Name(".md"), Predicate(..)])"#
        );
    }
}
