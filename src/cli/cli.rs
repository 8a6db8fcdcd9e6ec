use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::application::data::{ColorMode, LogLevel};
use crate::ignore_rules::DEFAULT_IGNORE_FILE_NAME;

/// Polls a directory tree and prints the files added (+), removed (-) and
/// modified (*) between scans.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// The directory to watch
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,

    /// File with the ignore rules, relative to the root
    #[clap(long, default_value = DEFAULT_IGNORE_FILE_NAME)]
    pub ignore_file: PathBuf,

    /// Delay between the end of one scan and the start of the next
    #[clap(long, short, default_value = "200ms", value_parser = humantime::parse_duration)]
    pub interval: Duration,

    #[clap(long, default_value = "auto", value_enum)]
    pub color: ColorMode,
}
