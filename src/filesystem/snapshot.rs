use std::path::Path;

use tracing::debug;

use crate::ext::PathExt;
use crate::filesystem::{FileRecord, WalkObserver, walk_observed};
use crate::ignore_rules::PathMatcher;

/// The records of one scan, strictly ascending by path in byte order.
///
/// The ordering is the one [`crate::diff::diff`] relies on, which is why a
/// snapshot can only be built through its constructors and never changes
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    records: Vec<FileRecord>,
}

impl Snapshot {
    /// Scans the tree below `root`. An empty tree, or one that could not be
    /// read at all, gives an empty snapshot.
    pub fn capture(root: &Path, matcher: &impl PathMatcher) -> Self {
        Self::capture_observed(root, matcher, &mut ())
    }

    pub fn capture_observed<M, O>(root: &Path, matcher: &M, observer: &mut O) -> Self
    where
        M: PathMatcher + ?Sized,
        O: WalkObserver + ?Sized,
    {
        let snapshot = Self::from_records(walk_observed(root, matcher, observer));
        debug!(
            "Captured {} entries under {}",
            snapshot.len(),
            root.best_effort_path_display()
        );
        snapshot
    }

    /// Sorts `records` by path. Of several records sharing a path, the first
    /// one is kept.
    pub fn from_records(mut records: Vec<FileRecord>) -> Self {
        // Stable, so the first of equal paths stays in front for dedup.
        records.sort_by(|a, b| a.path().cmp(b.path()));
        records.dedup_by(|later, earlier| later.path() == earlier.path());
        Self { records }
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(FileRecord::path)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
