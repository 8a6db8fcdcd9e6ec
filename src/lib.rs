//! Polling change detection for a directory tree.
//!
//! Each cycle captures a [`filesystem::Snapshot`] of the tree, leaving out
//! whatever the ignore rules exclude, and merges it against the previous one
//! to report the paths that were added, removed or modified since.

#![allow(clippy::enum_variant_names)]

pub mod application;
pub mod cli;
pub mod diff;
pub mod ext;
pub mod filesystem;
pub mod ignore_rules;
pub mod watcher;
