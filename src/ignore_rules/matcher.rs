use globset::{GlobBuilder, GlobMatcher};
use snafu::prelude::*;
use tracing::debug;

use crate::ignore_rules::IgnoreRules;

/// Decides which paths of a watched tree are left out of snapshots.
///
/// Paths are slash-separated and relative to the scan root.
pub trait PathMatcher {
    /// Whether `path` is omitted from snapshots. Unless the rule set has
    /// negating rules, an excluded directory is not descended into either.
    fn is_excluded(&self, path: &str) -> bool;

    /// Whether any rule re-includes paths, which may sit below an excluded
    /// directory.
    fn has_negating_rules(&self) -> bool;
}

impl<M: PathMatcher + ?Sized> PathMatcher for &M {
    fn is_excluded(&self, path: &str) -> bool {
        (**self).is_excluded(path)
    }

    fn has_negating_rules(&self) -> bool {
        (**self).has_negating_rules()
    }
}

#[derive(Debug, Clone)]
struct Rule {
    glob: GlobMatcher,
    /// Number of `/`-separated segments in the pattern.
    segments: usize,
    negated: bool,
}

impl Rule {
    /// A rule matches a path when its glob matches the whole path, or the
    /// parent directory made of the path's first `segments` segments.
    fn matches(&self, path: &str) -> bool {
        self.glob.is_match(path)
            || leading_segments(path, self.segments).is_some_and(|parent| self.glob.is_match(parent))
    }
}

/// [`PathMatcher`] over docker-style ignore rules.
///
/// Every rule matches from the scan root, so `*.log` only matches at the top
/// level while `**/*.log` matches at any depth; `*` and `?` never cross a `/`.
/// Rules are evaluated in order and the last one matching a path, or one of
/// its parent directories, decides: `d` then `!d/keep.txt` keeps
/// `d/keep.txt`, while `!d/keep.txt` then `d` drops it again.
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    rules: Vec<Rule>,
}

impl IgnoreMatcher {
    pub fn new(rules: &IgnoreRules) -> Result<Self, MatcherCreationError> {
        let mut compiled = Vec::with_capacity(rules.len());

        for pattern in rules.patterns() {
            let (negated, body) = match pattern.strip_prefix('!') {
                Some(body) => (true, body),
                None => (false, pattern.as_str()),
            };
            if matches!(body, "" | "." | "/") {
                debug!("Skipping rule '{}' naming the scan root itself", pattern);
                continue;
            }
            ensure!(
                !has_unclosed_class(body),
                UnclosedClassSnafu {
                    pattern: pattern.clone()
                }
            );

            let glob = GlobBuilder::new(body)
                .literal_separator(true)
                .backslash_escape(true)
                .build()
                .context(PatternSnafu {
                    pattern: pattern.clone(),
                })?
                .compile_matcher();

            compiled.push(Rule {
                glob,
                segments: body.split('/').count(),
                negated,
            });
        }

        let matcher = Self { rules: compiled };
        debug!(
            "Built matcher with {} rules ({} negating)",
            matcher.rules.len(),
            matcher.rules.iter().filter(|rule| rule.negated).count()
        );
        Ok(matcher)
    }

    /// A matcher that excludes nothing.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl PathMatcher for IgnoreMatcher {
    fn is_excluded(&self, path: &str) -> bool {
        self.rules.iter().fold(false, |excluded, rule| {
            if rule.matches(path) {
                !rule.negated
            } else {
                excluded
            }
        })
    }

    fn has_negating_rules(&self) -> bool {
        self.rules.iter().any(|rule| rule.negated)
    }
}

/// The first `count` segments of `path`, provided at least one more segment
/// follows them.
fn leading_segments(path: &str, count: usize) -> Option<&str> {
    let nth = count.checked_sub(1)?;
    path.match_indices('/').nth(nth).map(|(idx, _)| &path[..idx])
}

/// Whether a `[` opens a character class that is never closed. A `]` right
/// after the opening `[` (or `[!`, `[^`) does not close it.
fn has_unclosed_class(pattern: &str) -> bool {
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '[' => {
                let mut members = 0;
                let mut closed = false;
                let mut class = chars.by_ref().peekable();
                if matches!(class.peek(), Some('!' | '^')) {
                    class.next();
                }
                while let Some(c) = class.next() {
                    match c {
                        ']' if members > 0 => {
                            closed = true;
                            break;
                        }
                        '\\' => {
                            class.next();
                        }
                        _ => {}
                    }
                    members += 1;
                }
                if !closed {
                    return true;
                }
            }
            _ => {}
        }
    }

    false
}

#[derive(Debug, Snafu)]
pub enum MatcherCreationError {
    #[snafu(display("Invalid ignore pattern '{}'", pattern))]
    PatternError {
        pattern: String,
        source: globset::Error,
    },
    #[snafu(display("Invalid ignore pattern '{}': unclosed character class", pattern))]
    UnclosedClassError { pattern: String },
}
