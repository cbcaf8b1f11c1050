//! File system probing and directory enumeration for dirlist.
//!
//! This crate turns caller-supplied paths into the raw entries the
//! formatting stage works on:
//!
//! - [`FileSystem`] is the seam to the real file system; [`LocalFs`]
//!   implements it with `std::fs` and jwalk.
//! - [`classify_paths`] splits operands into sorted files and directories.
//! - [`assemble_entries`] builds the entry list for one directory,
//!   including the implied `.` and `..`.
//! - [`directory_sequence`] yields the directories to list, depth-first
//!   when recursing.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use dirlist_scan::{LocalFs, assemble_entries, classify_paths};
//!
//! let fs = LocalFs::new();
//! let classified = classify_paths(&fs, &[PathBuf::from(".")]);
//! for dir in &classified.dirs {
//!     let assembled = assemble_entries(&fs, dir).unwrap();
//!     println!("{} entries in {}", assembled.entries.len(), dir.display());
//! }
//! ```

mod assemble;
mod classify;
mod fs;

pub use assemble::{Assembled, assemble_entries, directory_sequence};
pub use classify::{ClassifiedPaths, classify_paths};
pub use fs::{Children, DirWalk, FileSystem, LocalFs};

// Re-export core types for convenience
pub use dirlist_core::{EntryKind, ListError, ListOptions, Metadata, RawEntry};
