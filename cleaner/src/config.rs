//! Cleaner configuration resolved from the environment.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the root of the code tree to clean.
pub const CODE_DIR_ENV: &str = "CODE_DIR";

/// Root used when `CODE_DIR` is unset or empty.
pub const DEFAULT_CODE_DIR: &str = "/opt/code_dir";

/// Resolved configuration for one cleaning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanConfig {
    /// Directory the walk starts from. Never itself a deletion candidate.
    pub root: PathBuf,
}

impl CleanConfig {
    /// Build a config for an explicit root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve from the raw value of `CODE_DIR`.
    ///
    /// An unset or empty value falls back to [`DEFAULT_CODE_DIR`].
    pub fn resolve(code_dir: Option<OsString>) -> Self {
        let root = match code_dir {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => PathBuf::from(DEFAULT_CODE_DIR),
        };
        Self { root }
    }

    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(env::var_os(CODE_DIR_ENV))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_falls_back_to_default() {
        let cfg = CleanConfig::resolve(None);
        assert_eq!(cfg.root, PathBuf::from(DEFAULT_CODE_DIR));
    }

    #[test]
    fn empty_falls_back_to_default() {
        let cfg = CleanConfig::resolve(Some(OsString::new()));
        assert_eq!(cfg.root, PathBuf::from(DEFAULT_CODE_DIR));
    }

    #[test]
    fn set_value_is_used_verbatim() {
        let cfg = CleanConfig::resolve(Some(OsString::from("ros2_code_dir")));
        assert_eq!(cfg, CleanConfig::new("ros2_code_dir"));
    }
}
