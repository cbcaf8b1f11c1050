//! File system access behind a trait.

use std::path::{Path, PathBuf};

use jwalk::{Parallelism, WalkDir};

use dirlist_core::{ListError, Metadata, RawEntry};

/// Lazily produced sequence of directory paths.
pub type DirWalk<'a> = Box<dyn Iterator<Item = Result<PathBuf, ListError>> + 'a>;

/// Children of one directory.
#[derive(Debug, Default)]
pub struct Children {
    /// Entries in enumeration order.
    pub entries: Vec<RawEntry>,
    /// Per-entry failures; the remaining entries are still listed.
    pub warnings: Vec<ListError>,
}

/// Everything the listing needs from a file system.
pub trait FileSystem {
    /// Metadata for a path, following symlinks.
    fn stat(&self, path: &Path) -> Result<Metadata, ListError>;

    /// One level of children, in the order the file system returns them.
    ///
    /// Child metadata does not follow symlinks.
    fn list_children(&self, dir: &Path) -> Result<Children, ListError>;

    /// Every directory reachable from `root`, depth-first, starting with
    /// `root` itself.
    fn walk_dirs(&self, root: &Path, include_hidden: bool) -> DirWalk<'_>;
}

/// The local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new local file system handle.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn stat(&self, path: &Path) -> Result<Metadata, ListError> {
        std::fs::metadata(path)
            .map(|m| Metadata::from_fs(&m))
            .map_err(|e| ListError::io(path, e))
    }

    fn list_children(&self, dir: &Path) -> Result<Children, ListError> {
        let reader = std::fs::read_dir(dir).map_err(|e| ListError::io(dir, e))?;
        let mut children = Children::default();

        for entry in reader {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    children.warnings.push(ListError::entry(dir, err));
                    continue;
                }
            };

            let path = entry.path();
            match std::fs::symlink_metadata(&path) {
                Ok(metadata) => {
                    let name = entry.file_name().to_string_lossy().into_owned();
                    children
                        .entries
                        .push(RawEntry::new(name, Metadata::from_fs(&metadata)));
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "skipping entry without metadata");
                    children.warnings.push(ListError::entry(path, err));
                }
            }
        }

        Ok(children)
    }

    fn walk_dirs(&self, root: &Path, include_hidden: bool) -> DirWalk<'_> {
        let root = root.to_path_buf();
        let walker = WalkDir::new(&root)
            .parallelism(Parallelism::Serial)
            .sort(true)
            .skip_hidden(!include_hidden)
            .follow_links(false)
            .min_depth(1);

        // The root is yielded as given rather than as jwalk renders it
        let first = std::iter::once(Ok(root.clone()));
        let descendants = walker.into_iter().filter_map(move |entry| match entry {
            Ok(entry) if entry.file_type().is_dir() => Some(Ok(entry.path())),
            Ok(_) => None,
            Err(err) => Some(Err(walk_error(&root, err))),
        });

        Box::new(first.chain(descendants))
    }
}

fn walk_error(root: &Path, err: jwalk::Error) -> ListError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
    let message = err.to_string();
    match err.into_io_error() {
        Some(io) => ListError::entry(path, io),
        None => ListError::Walk { path, message },
    }
}
