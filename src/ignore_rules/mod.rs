//! Ignore rules: reading the rule file of a watched tree and matching
//! relative paths against it.

mod matcher;
mod rules;

pub use matcher::{IgnoreMatcher, MatcherCreationError, PathMatcher};
pub use rules::{DEFAULT_IGNORE_FILE_NAME, IgnoreRules, RulesError};
