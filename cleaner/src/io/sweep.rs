//! Pruning walk that deletes packaging directories as it finds them.
//!
//! A matched directory is removed as soon as the walk reaches it and the walk
//! is told not to descend into it, so nothing beneath a removed directory is
//! ever visited (the `find ... -prune -exec rm -rf {} +` shape).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use crate::core::matcher::is_packaging_dir_name;
use crate::error::CleanError;

/// Check that `root` exists, is a directory, and can be listed.
pub fn ensure_root(root: &Path) -> Result<(), CleanError> {
    let metadata = fs::metadata(root).map_err(|err| CleanError::from_io(root, err))?;
    if !metadata.is_dir() {
        return Err(CleanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    fs::read_dir(root).map_err(|err| CleanError::from_io(root, err))?;
    Ok(())
}

/// Walk `root` and remove every packaging directory beneath it.
///
/// `on_removed` runs once per removed directory, in walk order (siblings by
/// file name). The root itself is never removed. Symlinks are not followed.
/// Returns the removed paths.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn sweep<F>(root: &Path, mut on_removed: F) -> Result<Vec<PathBuf>, CleanError>
where
    F: FnMut(&Path) -> Result<(), CleanError>,
{
    ensure_root(root)?;

    let mut removed = Vec::new();
    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|err| walk_error(root, err))?;
        if !entry.file_type().is_dir() || !is_packaging_dir_name(entry.file_name()) {
            continue;
        }
        walker.skip_current_dir();

        let path = entry.into_path();
        debug!(path = %path.display(), "removing packaging directory");
        remove_tree(&path)?;
        on_removed(&path)?;
        removed.push(path);
    }

    debug!(removed = removed.len(), "sweep finished");
    Ok(removed)
}

/// Forcibly remove `path` and everything under it.
///
/// A path that is already gone counts as removed.
pub fn remove_tree(path: &Path) -> Result<(), CleanError> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(CleanError::DeletionFailed {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn walk_error(root: &Path, err: walkdir::Error) -> CleanError {
    let path = err.path().unwrap_or(root).to_path_buf();
    match err.into_io_error() {
        Some(source) => CleanError::from_io(path, source),
        None => CleanError::Traversal {
            path,
            source: io::Error::other("filesystem loop detected"),
        },
    }
}
