//! Core types for dirlist.
//!
//! This crate provides the data model shared by every stage of a listing:
//! the per-invocation [`ListOptions`], the raw and rendered entry types, the
//! per-directory [`DirectoryResult`], and the error taxonomy.

mod entry;
mod error;
mod options;

pub use entry::{DirectoryResult, EntryKind, Metadata, RawEntry, RenderedEntry};
pub use error::{ListError, Severity};
pub use options::{DEFAULT_TILE_WIDTH, ListOptions, ListOptionsBuilder};
