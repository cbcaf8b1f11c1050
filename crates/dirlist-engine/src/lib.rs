//! Listing orchestration for dirlist.
//!
//! [`Lister`] drives a whole invocation: it classifies the operands, lists
//! every directory (depth-first under recursion), formats the file operands,
//! and hands the combined text to an [`OutputSink`]. Errors along the way
//! are reported through the same sink and folded into the returned
//! [`Severity`], which is the process exit status.
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use dirlist_core::ListOptions;
//! use dirlist_engine::{Lister, StdioSink};
//! use dirlist_scan::LocalFs;
//!
//! let fs = LocalFs::new();
//! let lister = Lister::new(&fs, ListOptions::default());
//! let status = lister.run(&[PathBuf::from(".")], &mut StdioSink::new()).unwrap();
//! std::process::exit(i32::from(status.code()));
//! ```

mod aggregate;
mod lister;
mod sink;

pub use aggregate::aggregate;
pub use lister::Lister;
pub use sink::{BufferSink, OutputSink, StdioSink};

// Re-export core types
pub use dirlist_core::{DirectoryResult, ListOptions, Severity};
