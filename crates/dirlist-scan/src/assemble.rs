//! Building the raw entry list for a directory.

use std::path::{Path, PathBuf};

use dirlist_core::{ListError, ListOptions, RawEntry};

use crate::fs::{DirWalk, FileSystem};

/// Raw entries of one directory.
#[derive(Debug, Default)]
pub struct Assembled {
    /// `.`, `..`, then the children in enumeration order.
    pub entries: Vec<RawEntry>,
    /// Failures while enumerating; the entries gathered so far are kept.
    pub errors: Vec<ListError>,
}

/// Assemble the raw entries of `dir`.
///
/// The implied `.` and `..` carry the metadata of `dir` and its parent. If
/// `dir` itself cannot be probed the whole directory is an error; if only its
/// children cannot be read, the implied entries are still returned.
pub fn assemble_entries<F: FileSystem + ?Sized>(
    fs: &F,
    dir: &Path,
) -> Result<Assembled, ListError> {
    let current = fs.stat(dir)?;
    let parent = fs.stat(&dir.join(".."))?;

    let mut assembled = Assembled::default();
    assembled.entries.push(RawEntry::new(".", current));
    assembled.entries.push(RawEntry::new("..", parent));

    match fs.list_children(dir) {
        Ok(children) => {
            assembled.entries.extend(children.entries);
            assembled.errors.extend(children.warnings);
        }
        Err(err) => assembled.errors.push(err),
    }

    Ok(assembled)
}

/// Directories to list for the operand `root`.
///
/// Just `root` normally; under `recursive`, every directory below it in
/// depth-first order, pulled lazily from the file system.
pub fn directory_sequence<'a, F: FileSystem + ?Sized>(
    fs: &'a F,
    root: &Path,
    options: &ListOptions,
) -> DirWalk<'a> {
    if options.recursive {
        fs.walk_dirs(root, options.shows_hidden_dirs())
    } else {
        Box::new(std::iter::once(Ok::<PathBuf, ListError>(root.to_path_buf())))
    }
}
