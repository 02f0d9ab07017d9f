//! Error types for a cleaning run.

use std::io;
use std::path::PathBuf;

use crate::exit_codes;

/// Errors that abort a cleaning run.
///
/// Every variant is fatal. Deletions completed before the failure are not
/// rolled back.
#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    /// The root (or an entry discovered during the walk) does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound { path: PathBuf, source: io::Error },

    /// The root (or a directory beneath it) cannot be read.
    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf, source: io::Error },

    /// The root exists but is not a directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// A matched directory could not be removed.
    #[error("failed to delete {}", path.display())]
    DeletionFailed { path: PathBuf, source: io::Error },

    /// Any other I/O failure while walking the tree.
    #[error("failed to traverse {}", path.display())]
    Traversal { path: PathBuf, source: io::Error },

    /// Writing product output to stdout failed.
    #[error("failed to write output")]
    Output(#[source] io::Error),
}

impl CleanError {
    /// Classify an I/O error raised while inspecting or reading `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound { path, source },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Traversal { path, source },
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PathNotFound { .. } => exit_codes::PATH_NOT_FOUND,
            Self::PermissionDenied { .. } => exit_codes::PERMISSION_DENIED,
            Self::DeletionFailed { .. } => exit_codes::DELETION_FAILED,
            Self::NotADirectory { .. } | Self::Traversal { .. } | Self::Output(_) => {
                exit_codes::FAILED
            }
        }
    }
}
