use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::diff::diff;
use crate::ext::PathExt;
use crate::filesystem::{Snapshot, WalkObserver};
use crate::ignore_rules::PathMatcher;
use crate::watcher::Reporter;

/// What the driver holds between two ticks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DriverState {
    /// No scan has succeeded yet.
    #[default]
    Uninitialized,
    /// The last successful scan, to compare the next one against.
    Running { baseline: Snapshot },
}

/// Outcome of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// First usable scan, kept as baseline without reporting anything.
    Initialized { entries: usize },
    /// Scan compared against the baseline, which it then replaced.
    Compared { changes: usize },
    /// The root could not be read; state left untouched.
    Skipped,
}

/// Failures absorbed while capturing one snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanHealth {
    root_unreadable: bool,
    unreadable_subtrees: usize,
}

impl ScanHealth {
    /// An empty snapshot from an unreadable root says nothing about the tree,
    /// so such a scan must not be compared against anything.
    pub fn is_usable(&self) -> bool {
        !self.root_unreadable
    }

    pub fn unreadable_subtrees(&self) -> usize {
        self.unreadable_subtrees
    }
}

impl WalkObserver for ScanHealth {
    fn on_unreadable(&mut self, error: &walkdir::Error) {
        if error.depth() == 0 {
            self.root_unreadable = true;
        } else {
            self.unreadable_subtrees += 1;
        }
    }
}

/// Runs polling cycles over one tree, owning the baseline between them.
pub struct Driver<M> {
    root: PathBuf,
    matcher: M,
    state: DriverState,
}

impl<M: PathMatcher> Driver<M> {
    pub fn new(root: impl Into<PathBuf>, matcher: M) -> Self {
        Self {
            root: root.into(),
            matcher,
            state: DriverState::default(),
        }
    }

    pub fn state(&self) -> &DriverState {
        &self.state
    }

    /// Scans the tree and feeds the result to [`Driver::tick`].
    pub fn poll_once<W: Write>(&mut self, reporter: &mut Reporter<W>) -> io::Result<Tick> {
        let mut health = ScanHealth::default();
        let latest = Snapshot::capture_observed(&self.root, &self.matcher, &mut health);
        self.tick(latest, health, reporter)
    }

    /// Reports the changes from the baseline to `latest` and makes `latest`
    /// the new baseline. The first usable scan only becomes the baseline.
    pub fn tick<W: Write>(
        &mut self,
        latest: Snapshot,
        health: ScanHealth,
        reporter: &mut Reporter<W>,
    ) -> io::Result<Tick> {
        if !health.is_usable() {
            warn!(
                "Could not read {}, skipping this scan",
                self.root.best_effort_path_display()
            );
            return Ok(Tick::Skipped);
        }
        if health.unreadable_subtrees() > 0 {
            debug!(
                "{} parts of the tree could not be read",
                health.unreadable_subtrees()
            );
        }

        let tick = match &self.state {
            DriverState::Uninitialized => {
                info!(
                    "Watching {} ({} entries)",
                    self.root.best_effort_path_display(),
                    latest.len()
                );
                Tick::Initialized {
                    entries: latest.len(),
                }
            }
            DriverState::Running { baseline } => {
                let mut changes = 0;
                for change in diff(baseline, &latest) {
                    reporter.report(&change)?;
                    changes += 1;
                }
                reporter.flush()?;
                debug!("Reported {} changes", changes);
                Tick::Compared { changes }
            }
        };

        self.state = DriverState::Running { baseline: latest };
        Ok(tick)
    }
}
