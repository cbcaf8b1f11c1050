//! Entry and result types.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Type of file system object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Symbolic link (not followed).
    Symlink,
    /// Block device.
    BlockDevice,
    /// Character device.
    CharDevice,
    /// Unix domain socket.
    Socket,
    /// Named pipe.
    Fifo,
    /// Anything the platform reports that fits none of the above.
    Other,
}

/// Metadata snapshot for one file system object.
///
/// Obtained once per listing pass and never refreshed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Object type.
    pub kind: EntryKind,
    /// Raw mode bits (permission bits in the low 12).
    pub mode: u32,
    /// Number of hard links.
    pub link_count: u64,
    /// Owner user id.
    pub owner_id: u32,
    /// Owner group id.
    pub group_id: u32,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time.
    pub modified: SystemTime,
    /// Inode number.
    pub inode: u64,
}

impl Metadata {
    /// Create metadata with the given kind and size, everything else zeroed.
    pub fn new(kind: EntryKind, size: u64) -> Self {
        Self {
            kind,
            mode: 0,
            link_count: 1,
            owner_id: 0,
            group_id: 0,
            size,
            modified: UNIX_EPOCH,
            inode: 0,
        }
    }

    /// Set the mode bits.
    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    /// Set the modification time.
    pub fn with_modified(mut self, modified: SystemTime) -> Self {
        self.modified = modified;
        self
    }

    /// Set the inode number.
    pub fn with_inode(mut self, inode: u64) -> Self {
        self.inode = inode;
        self
    }

    /// Snapshot a standard library metadata value.
    pub fn from_fs(metadata: &std::fs::Metadata) -> Self {
        let (mode, link_count, owner_id, group_id, inode) = ownership(metadata);
        Self {
            kind: kind_of(&metadata.file_type()),
            mode,
            link_count,
            owner_id,
            group_id,
            size: metadata.len(),
            modified: metadata.modified().unwrap_or(UNIX_EPOCH),
            inode,
        }
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Check if this is a regular file.
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Check if this is a symlink.
    pub fn is_symlink(&self) -> bool {
        self.kind == EntryKind::Symlink
    }

    /// Check if this is a block or character device.
    pub fn is_device(&self) -> bool {
        matches!(self.kind, EntryKind::BlockDevice | EntryKind::CharDevice)
    }

    /// Check if this is a socket.
    pub fn is_socket(&self) -> bool {
        self.kind == EntryKind::Socket
    }

    /// Check if this is a named pipe.
    pub fn is_fifo(&self) -> bool {
        self.kind == EntryKind::Fifo
    }

    /// Check if any execute bit is set on a regular file.
    pub fn is_executable(&self) -> bool {
        self.is_file() && self.mode & 0o111 != 0
    }
}

/// One file system object as seen by a listing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Name shown for the entry (a bare name, or the operand for file listings).
    pub name: String,
    /// Metadata snapshot.
    pub metadata: Metadata,
}

impl RawEntry {
    /// Create a new raw entry.
    pub fn new(name: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            name: name.into(),
            metadata,
        }
    }

    /// Final path component of the name starts with a dot.
    ///
    /// Only the last component counts, so an operand like `./notes.txt` is
    /// not dotted while `dir/.env` is.
    pub fn is_dotted(&self) -> bool {
        self.name
            .rsplit(std::path::is_separator)
            .next()
            .is_some_and(|base| base.starts_with('.'))
    }

    /// Name is `.` or `..`.
    pub fn is_implied(&self) -> bool {
        self.name == "." || self.name == ".."
    }
}

/// An entry after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedEntry {
    /// A single styled name, for tiled and one-per-line output.
    Tiled(String),
    /// Ordered styled fields for a detail row; the name is always last.
    Detail(Vec<String>),
}

impl RenderedEntry {
    /// Check if this is a detail row.
    pub fn is_detail(&self) -> bool {
        matches!(self, RenderedEntry::Detail(_))
    }
}

/// Listing output for one directory (or for the set of file operands).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryResult {
    /// Path that was listed.
    pub path: PathBuf,
    /// Sum of the raw sizes of every entry considered, shown or not.
    pub total_size: u64,
    /// Rendered entries.
    pub text: String,
}

impl DirectoryResult {
    /// Create a new directory result.
    pub fn new(path: impl Into<PathBuf>, total_size: u64, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            total_size,
            text: text.into(),
        }
    }
}

#[cfg(unix)]
fn kind_of(file_type: &std::fs::FileType) -> EntryKind {
    use std::os::unix::fs::FileTypeExt;

    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else if file_type.is_block_device() {
        EntryKind::BlockDevice
    } else if file_type.is_char_device() {
        EntryKind::CharDevice
    } else if file_type.is_socket() {
        EntryKind::Socket
    } else if file_type.is_fifo() {
        EntryKind::Fifo
    } else {
        EntryKind::Other
    }
}

#[cfg(not(unix))]
fn kind_of(file_type: &std::fs::FileType) -> EntryKind {
    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

/// Mode, link count, uid, gid and inode of a metadata value.
#[cfg(unix)]
fn ownership(metadata: &std::fs::Metadata) -> (u32, u64, u32, u32, u64) {
    use std::os::unix::fs::MetadataExt;
    (
        metadata.mode(),
        metadata.nlink(),
        metadata.uid(),
        metadata.gid(),
        metadata.ino(),
    )
}

#[cfg(not(unix))]
fn ownership(metadata: &std::fs::Metadata) -> (u32, u64, u32, u32, u64) {
    // Only the read-only flag exists here; ids and inodes read as zero
    let mode = if metadata.permissions().readonly() {
        0o444
    } else if metadata.is_dir() {
        0o755
    } else {
        0o644
    };
    (mode, 1, 0, 0, 0)
}
