use std::io::ErrorKind;
use std::path::Path;

use compio::fs;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::ext::PathExt;

pub const DEFAULT_IGNORE_FILE_NAME: &str = ".dockerignore";

const UTF8_BOM: char = '\u{feff}';
const NEGATION_PREFIX: char = '!';

/// Ordered list of cleaned ignore patterns. Negating patterns keep their
/// leading `!`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IgnoreRules {
    patterns: Vec<String>,
}

impl IgnoreRules {
    /// Reads the rules from `path`. A missing file is the empty rule set.
    pub async fn read(path: &Path) -> Result<Self, RulesError> {
        debug!("Reading ignore rules from {}", path.best_effort_path_display());
        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "No ignore file at {}, watching every path",
                    path.best_effort_path_display()
                );
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).context(ReadSnafu {
                    file_path: path.best_effort_path_display(),
                });
            }
        };

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.best_effort_path_display(),
        })?;
        let rules = Self::try_from(contents.as_str())?;
        debug!("Loaded ignore rules: {:?}", rules.patterns);
        Ok(rules)
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    fn parse_line(line_number: usize, line: &str) -> Result<Option<String>, RulesError> {
        // Comments are recognised before trimming, so " #x" is a pattern.
        if line.starts_with('#') {
            return Ok(None);
        }
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (negated, pattern) = match line.strip_prefix(NEGATION_PREFIX) {
            Some(rest) => (true, rest.trim()),
            None => (false, line),
        };
        ensure!(!pattern.is_empty(), BareNegationSnafu { line_number });

        let cleaned = clean_pattern(pattern);
        let relative = match cleaned.strip_prefix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => cleaned.as_str(),
        };

        Ok(Some(if negated {
            format!("{NEGATION_PREFIX}{relative}")
        } else {
            relative.to_string()
        }))
    }
}

impl TryFrom<&str> for IgnoreRules {
    type Error = RulesError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let contents = contents.strip_prefix(UTF8_BOM).unwrap_or(contents);
        let patterns = contents
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| Self::parse_line(idx + 1, line).transpose())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(IgnoreRules { patterns })
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoreRules {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        IgnoreRules {
            patterns: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Lexically normalises a slash-separated pattern: drops `.` and empty
/// segments, resolves `..` against the preceding segment and removes any
/// trailing slash. The empty result is `.`.
fn clean_pattern(pattern: &str) -> String {
    let rooted = pattern.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in pattern.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

#[derive(Debug, Snafu)]
pub enum RulesError {
    #[snafu(display("Failed to read the ignore file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("The ignore file {} is not valid UTF-8", file_path))]
    EncodingError {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display(
        "Illegal exclusion pattern on line {}: '!' must be followed by a pattern",
        line_number
    ))]
    BareNegationError { line_number: usize },
}
