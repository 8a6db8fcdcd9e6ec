use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::ext::PathExt;
use crate::filesystem::FileRecord;
use crate::ignore_rules::PathMatcher;

/// Receives the failures a walk absorbs.
///
/// A walk never fails: a directory that cannot be listed, or an entry that
/// vanished before it could be inspected, simply contributes no records.
/// Observers get to see those failures without changing that outcome.
pub trait WalkObserver {
    fn on_unreadable(&mut self, error: &walkdir::Error);
}

impl WalkObserver for () {
    fn on_unreadable(&mut self, _error: &walkdir::Error) {}
}

/// Lists every entry below `root` that `matcher` does not exclude, in no
/// particular order.
pub fn walk(root: &Path, matcher: &impl PathMatcher) -> Vec<FileRecord> {
    walk_observed(root, matcher, &mut ())
}

/// Same as [`walk`], reporting absorbed failures to `observer`.
///
/// Symbolic links are recorded but never followed. An excluded directory is
/// still descended into when the matcher has negating rules, since one of
/// them may re-include something below it.
pub fn walk_observed<M, O>(root: &Path, matcher: &M, observer: &mut O) -> Vec<FileRecord>
where
    M: PathMatcher + ?Sized,
    O: WalkObserver + ?Sized,
{
    let descend_into_excluded = matcher.has_negating_rules();
    let mut records = Vec::new();
    let mut entries = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .into_iter();

    while let Some(entry) = entries.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("Leaving out unreadable part of the tree: {}", err);
                observer.on_unreadable(&err);
                continue;
            }
        };

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let path = relative.to_slash_string();
        let excluded = matcher.is_excluded(&path);

        if !excluded {
            match entry.metadata() {
                Ok(metadata) => match metadata.modified() {
                    Ok(modified_at) => records.push(FileRecord::new(path, modified_at)),
                    Err(err) => debug!("No modification time for {}: {}", path, err),
                },
                Err(err) => {
                    debug!("Entry {} vanished during the walk: {}", path, err);
                    observer.on_unreadable(&err);
                }
            }
        }

        if excluded && !descend_into_excluded && entry.file_type().is_dir() {
            entries.skip_current_dir();
        }
    }

    records
}
