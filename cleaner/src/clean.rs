//! One cleaning run: announce the root, sweep it, report what was removed.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::CleanConfig;
use crate::error::CleanError;
use crate::io::sweep::sweep;

/// External tool that regenerates the removed directories.
pub const GENERATOR: &str = "agiros_oob_builder_procedural.py";

/// What a successful run removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub root: PathBuf,
    /// Removed directories in walk order.
    pub removed: Vec<PathBuf>,
}

/// Remove every packaging directory under `config.root`.
///
/// Writes product output to `out`: a start line naming the root, one line per
/// removed directory, and a completion line. Any failure aborts the run;
/// directories removed before the failure stay removed.
pub fn run_clean<W: Write>(config: &CleanConfig, out: &mut W) -> Result<CleanReport, CleanError> {
    let root = config.root.as_path();
    writeln!(out, "{}", start_line(root)).map_err(CleanError::Output)?;

    let removed = sweep(root, |path| {
        writeln!(out, "{}", path.display()).map_err(CleanError::Output)
    })?;

    writeln!(out, "{}", completion_line(removed.len())).map_err(CleanError::Output)?;
    out.flush().map_err(CleanError::Output)?;

    info!(root = %root.display(), removed = removed.len(), "clean finished");
    Ok(CleanReport {
        root: root.to_path_buf(),
        removed,
    })
}

fn start_line(root: &Path) -> String {
    format!("Removing debian/ and rpm/ directories under {}", root.display())
}

fn completion_line(removed: usize) -> String {
    let noun = if removed == 1 { "directory" } else { "directories" };
    format!(
        "Done: removed {removed} {noun}. The next {GENERATOR} run will recreate any removed packaging directories."
    )
}
