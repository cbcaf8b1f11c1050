//! Error types for listing operations.

use std::path::PathBuf;

use thiserror::Error;

/// How serious a listing error is.
///
/// The maximum severity seen during an invocation becomes its exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    /// Nothing went wrong.
    #[default]
    Ok,
    /// A requested path does not exist.
    Minor,
    /// Any other failure.
    Serious,
}

impl Severity {
    /// Process exit code for this severity.
    pub fn code(self) -> u8 {
        match self {
            Severity::Ok => 0,
            Severity::Minor => 1,
            Severity::Serious => 2,
        }
    }
}

/// Errors that can occur while probing or enumerating paths.
///
/// None of these abort a listing; they are reported and the next path is
/// processed.
#[derive(Debug, Error)]
pub enum ListError {
    /// Path does not exist.
    #[error("cannot access {path}: No such file or directory")]
    NotFound { path: PathBuf },

    /// Permission denied for a path.
    #[error("cannot open {path}: Permission denied")]
    PermissionDenied { path: PathBuf },

    /// Generic I/O error.
    #[error("cannot read {path}: {source} ({kind:?})", kind = .source.kind())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failure reported by the recursive directory walker.
    #[error("cannot traverse {path}: {message}")]
    Walk { path: PathBuf, message: String },
}

impl ListError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }

    /// Create an error for a child found while enumerating a directory.
    ///
    /// A child that is gone by the time it is probed was never requested by
    /// the caller, so it is not reported as a missing path.
    pub fn entry(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }

    /// The path this error is about.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotFound { path }
            | Self::PermissionDenied { path }
            | Self::Io { path, .. }
            | Self::Walk { path, .. } => path,
        }
    }

    /// Severity contributed to the exit status.
    pub fn severity(&self) -> Severity {
        match self {
            Self::NotFound { .. } => Severity::Minor,
            _ => Severity::Serious,
        }
    }

    /// User-facing diagnostic line.
    pub fn report(&self) -> String {
        format!("dls: {self}")
    }
}
