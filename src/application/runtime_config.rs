use std::path::PathBuf;
use std::time::Duration;

use crate::application::data::ColorMode;
use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub root: PathBuf,
    /// Relative to `root` unless absolute.
    pub ignore_file: PathBuf,
    pub interval: Duration,
    pub color: ColorMode,
}

impl RuntimeConfig {
    pub fn ignore_file_path(&self) -> PathBuf {
        self.root.join(&self.ignore_file)
    }
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            root: cli.root,
            ignore_file: cli.ignore_file,
            interval: cli.interval,
            color: cli.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn config(root: &str, ignore_file: &str) -> RuntimeConfig {
        RuntimeConfig {
            root: root.into(),
            ignore_file: ignore_file.into(),
            interval: Duration::from_millis(200),
            color: ColorMode::Never,
        }
    }

    #[test]
    fn test_ignore_file_is_resolved_against_root() {
        assert_eq!(
            config("project", ".dockerignore").ignore_file_path(),
            Path::new("project/.dockerignore")
        );
    }

    #[test]
    fn test_absolute_ignore_file_is_kept() {
        assert_eq!(
            config("project", "/etc/rules").ignore_file_path(),
            Path::new("/etc/rules")
        );
    }
}
