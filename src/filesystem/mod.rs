//! Scanning of the watched tree.
//!
//! The walker lists every entry below the scan root that the ignore rules
//! leave in, and the snapshot turns that listing into the sorted, immutable
//! form the diff works on.

mod file_record;
mod snapshot;
mod walker;

pub use file_record::FileRecord;
pub use snapshot::Snapshot;
pub use walker::{WalkObserver, walk, walk_observed};
