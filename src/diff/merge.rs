use std::cmp::Ordering;
use std::iter::FusedIterator;

use crate::diff::Change;
use crate::filesystem::{FileRecord, Snapshot};

/// Lazily merges two snapshots into the changes leading from `baseline` to
/// `latest`, ascending by path.
///
/// A path only in `baseline` is [`Change::Removed`], a path only in `latest`
/// is [`Change::Added`], and a path in both is [`Change::Modified`] when its
/// modification time moved forward. A timestamp that stayed put or went
/// backwards produces nothing, whatever happened to the contents.
pub fn diff<'a>(baseline: &'a Snapshot, latest: &'a Snapshot) -> Diff<'a> {
    Diff {
        baseline: baseline.records(),
        latest: latest.records(),
    }
}

/// Iterator returned by [`diff`]. Holds nothing but the unconsumed tails of
/// both snapshots.
#[derive(Debug, Clone)]
pub struct Diff<'a> {
    baseline: &'a [FileRecord],
    latest: &'a [FileRecord],
}

impl<'a> Iterator for Diff<'a> {
    type Item = Change<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match (self.baseline.split_first(), self.latest.split_first()) {
                (Some((old, old_rest)), Some((new, new_rest))) => {
                    match old.path().cmp(new.path()) {
                        Ordering::Less => {
                            self.baseline = old_rest;
                            return Some(Change::Removed(old.path()));
                        }
                        Ordering::Greater => {
                            self.latest = new_rest;
                            return Some(Change::Added(new.path()));
                        }
                        Ordering::Equal => {
                            self.baseline = old_rest;
                            self.latest = new_rest;
                            if old.modified_at() < new.modified_at() {
                                return Some(Change::Modified(new.path()));
                            }
                        }
                    }
                }
                (Some((old, old_rest)), None) => {
                    self.baseline = old_rest;
                    return Some(Change::Removed(old.path()));
                }
                (None, Some((new, new_rest))) => {
                    self.latest = new_rest;
                    return Some(Change::Added(new.path()));
                }
                (None, None) => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (old, new) = (self.baseline.len(), self.latest.len());
        (old.abs_diff(new), Some(old + new))
    }
}

impl FusedIterator for Diff<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use std::collections::BTreeSet;
    use std::time::{Duration, SystemTime};

    fn at(nanos: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000) + Duration::from_nanos(nanos)
    }

    fn snapshot(records: &[(&str, u64)]) -> Snapshot {
        Snapshot::from_records(
            records
                .iter()
                .map(|(path, nanos)| FileRecord::new(*path, at(*nanos)))
                .collect(),
        )
    }

    fn report(baseline: &Snapshot, latest: &Snapshot) -> Vec<String> {
        diff(baseline, latest).map(|change| change.to_string()).collect()
    }

    #[rstest]
    #[case::modified_then_added(
        &[("a.txt", 0), ("b.txt", 0)],
        &[("a.txt", 0), ("b.txt", 1), ("c.txt", 1)],
        &["* b.txt", "+ c.txt"]
    )]
    #[case::removed(&[("x.txt", 0), ("y.txt", 0)], &[("y.txt", 0)], &["- x.txt"])]
    #[case::from_empty(&[], &[("only.txt", 0)], &["+ only.txt"])]
    #[case::to_empty(&[("a", 0), ("a/b", 0)], &[], &["- a", "- a/b"])]
    #[case::both_empty(&[], &[], &[])]
    #[case::interleaved(
        &[("a", 0), ("c", 0), ("e", 0)],
        &[("b", 0), ("c", 0), ("d", 0)],
        &["- a", "+ b", "+ d", "- e"]
    )]
    #[case::trailing_baseline(&[("a", 0), ("z1", 0), ("z2", 0)], &[("a", 0)], &["- z1", "- z2"])]
    #[case::trailing_latest(&[("a", 0)], &[("a", 0), ("z1", 0), ("z2", 0)], &["+ z1", "+ z2"])]
    fn test_diff_reports_in_path_order(
        #[case] baseline: &[(&str, u64)],
        #[case] latest: &[(&str, u64)],
        #[case] expected: &[&str],
    ) {
        assert_eq!(report(&snapshot(baseline), &snapshot(latest)), expected);
    }

    #[rstest]
    #[case(5, 5, false)]
    #[case(5, 6, true)]
    #[case(6, 5, false)]
    fn test_modified_only_when_time_moves_forward(
        #[case] before: u64,
        #[case] after: u64,
        #[case] reported: bool,
    ) {
        let baseline = snapshot(&[("f", before)]);
        let latest = snapshot(&[("f", after)]);

        let changes = diff(&baseline, &latest).collect::<Vec<_>>();

        if reported {
            assert_eq!(changes, [Change::Modified("f")]);
        } else {
            assert!(changes.is_empty());
        }
    }

    #[test]
    fn test_diff_with_itself_is_empty() {
        let snapshot = snapshot(&[("a", 3), ("a/b", 1), ("c", 2)]);
        assert_eq!(diff(&snapshot, &snapshot).count(), 0);
    }

    #[test]
    fn test_every_differing_path_reported_once() {
        let baseline = snapshot(&[
            ("common/same", 1),
            ("common/newer", 1),
            ("common/older", 5),
            ("gone/1", 1),
            ("gone/2", 1),
            ("m", 1),
        ]);
        let latest = snapshot(&[
            ("added", 1),
            ("common/same", 1),
            ("common/newer", 2),
            ("common/older", 4),
            ("m", 7),
            ("zz", 1),
        ]);

        let changes = diff(&baseline, &latest).collect::<Vec<_>>();
        let reported = changes.iter().map(Change::path).collect::<Vec<_>>();
        let unique = reported.iter().copied().collect::<BTreeSet<_>>();

        assert_eq!(reported.len(), unique.len());
        assert!(reported.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(
            unique,
            BTreeSet::from(["added", "common/newer", "gone/1", "gone/2", "m", "zz"])
        );
        assert_eq!(changes, [
            Change::Added("added"),
            Change::Modified("common/newer"),
            Change::Removed("gone/1"),
            Change::Removed("gone/2"),
            Change::Modified("m"),
            Change::Added("zz"),
        ]);
    }

    #[test]
    fn test_diff_is_fused() {
        let baseline = snapshot(&[("a", 0)]);
        let latest = snapshot(&[]);
        let mut changes = diff(&baseline, &latest);

        assert_eq!(changes.next(), Some(Change::Removed("a")));
        assert_eq!(changes.next(), None);
        assert_eq!(changes.next(), None);
    }
}
