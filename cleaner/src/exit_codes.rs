//! Stable exit codes for `clean-generated`.

/// All matched directories were removed (or none existed).
pub const OK: i32 = 0;
/// Unclassified failure (root is not a directory, traversal or output error).
pub const FAILED: i32 = 1;
// 2 is clap's usage-error status.
/// The root path does not exist.
pub const PATH_NOT_FOUND: i32 = 3;
/// The root path (or a directory beneath it) could not be read.
pub const PERMISSION_DENIED: i32 = 4;
/// A matched directory could not be deleted.
pub const DELETION_FAILED: i32 = 5;
