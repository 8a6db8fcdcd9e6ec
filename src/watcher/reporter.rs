use std::io::{self, Write};

use colored::Colorize;

use crate::diff::Change;

/// Writes one line per change, `<marker> <path>`.
pub struct Reporter<W: Write> {
    out: W,
    colored: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, colored: bool) -> Self {
        Self { out, colored }
    }

    pub fn report(&mut self, change: &Change<'_>) -> io::Result<()> {
        if !self.colored {
            return writeln!(self.out, "{change}");
        }

        let marker = change.marker().to_string();
        let marker = match change {
            Change::Added(_) => marker.green(),
            Change::Removed(_) => marker.red(),
            Change::Modified(_) => marker.yellow(),
        };
        writeln!(self.out, "{} {}", marker, change.path())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
