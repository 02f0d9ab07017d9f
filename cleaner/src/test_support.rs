//! Test-only helpers for building scratch directory trees.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary code tree that is deleted on drop.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create an empty tree in a fresh temp directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Create a tree and populate it with `dirs` (relative, `/`-separated).
    pub fn with_dirs(dirs: &[&str]) -> io::Result<Self> {
        let tree = Self::new()?;
        for dir in dirs {
            tree.mkdir(dir)?;
        }
        Ok(tree)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Create a directory (and parents) relative to the root.
    pub fn mkdir(&self, rel: &str) -> io::Result<PathBuf> {
        let path = self.path(rel);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Write a file relative to the root, creating parent directories.
    pub fn write(&self, rel: &str, contents: &str) -> io::Result<PathBuf> {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }

    /// All directories under the root, as sorted `/`-separated relative paths.
    pub fn dirs(&self) -> io::Result<Vec<String>> {
        let mut out = Vec::new();
        collect_dirs(self.root(), self.root(), &mut out)?;
        out.sort();
        Ok(out)
    }
}

/// Restores a directory's original permissions when dropped.
#[cfg(unix)]
pub struct ModeGuard {
    path: PathBuf,
    original: fs::Permissions,
}

#[cfg(unix)]
impl Drop for ModeGuard {
    fn drop(&mut self) {
        let _ = fs::set_permissions(&self.path, self.original.clone());
    }
}

#[cfg(unix)]
impl TestTree {
    /// Set the unix mode of `rel`, restoring the old mode when the guard drops.
    ///
    /// Keep the guard alive until the test is done; it must drop before the
    /// tree so the temp directory can be cleaned up.
    pub fn chmod(&self, rel: &str, mode: u32) -> io::Result<ModeGuard> {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path(rel);
        let original = fs::metadata(&path)?.permissions();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode))?;
        Ok(ModeGuard { path, original })
    }
}

/// Return true if the current user can still create files in `dir`.
///
/// Root (or `CAP_DAC_OVERRIDE`) ignores mode bits, so permission tests use
/// this to skip themselves where they cannot fail.
pub fn can_write_into(dir: &Path) -> bool {
    let marker = dir.join(".cleaner-write-check");
    match fs::write(&marker, "") {
        Ok(()) => {
            let _ = fs::remove_file(&marker);
            true
        }
        Err(_) => false,
    }
}

/// Return true if the current user can list `dir`.
pub fn can_list(dir: &Path) -> bool {
    fs::read_dir(dir).is_ok()
}

fn collect_dirs(root: &Path, dir: &Path, out: &mut Vec<String>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let path = entry.path();
        let rel = path
            .strip_prefix(root)
            .map_err(io::Error::other)?
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        out.push(rel);
        collect_dirs(root, &path, out)?;
    }
    Ok(())
}
