//! Comparison of two snapshots.

mod change;
mod merge;

pub use change::Change;
pub use merge::{Diff, diff};
