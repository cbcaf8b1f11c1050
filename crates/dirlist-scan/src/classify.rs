//! Splitting operands into files and directories.

use std::path::PathBuf;

use dirlist_core::{EntryKind, ListError, RawEntry};

use crate::fs::FileSystem;

/// Operands sorted into what gets listed how.
#[derive(Debug, Default)]
pub struct ClassifiedPaths {
    /// Regular file operands, sorted by path; each entry is named after its operand.
    pub files: Vec<RawEntry>,
    /// Directory operands, sorted.
    pub dirs: Vec<PathBuf>,
    /// Operands that could not be probed, in operand order.
    pub errors: Vec<ListError>,
}

/// Probe every operand and split them into files and directories.
///
/// An empty operand list means the current directory. A failed probe is
/// recorded and the remaining operands are still classified. Operands that
/// are neither regular files nor directories are dropped.
pub fn classify_paths<F: FileSystem + ?Sized>(fs: &F, paths: &[PathBuf]) -> ClassifiedPaths {
    let default_paths = [PathBuf::from(".")];
    let paths = if paths.is_empty() { &default_paths[..] } else { paths };

    let mut classified = ClassifiedPaths::default();

    for path in paths {
        match fs.stat(path) {
            Ok(metadata) => match metadata.kind {
                EntryKind::Directory => classified.dirs.push(path.clone()),
                EntryKind::File => classified
                    .files
                    .push(RawEntry::new(path.to_string_lossy(), metadata)),
                kind => {
                    tracing::debug!(path = %path.display(), ?kind, "ignoring operand");
                }
            },
            Err(err) => classified.errors.push(err),
        }
    }

    classified.files.sort_by(|a, b| a.name.cmp(&b.name));
    classified.dirs.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    classified
}
