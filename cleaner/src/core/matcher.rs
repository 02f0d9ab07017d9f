//! Name filter for generated packaging directories.

use std::ffi::OsStr;

/// Directory names the packaging generator owns and recreates.
pub const PACKAGING_DIR_NAMES: [&str; 2] = ["debian", "rpm"];

/// Return true if `name` is a packaging directory name, ignoring ASCII case.
///
/// Names that are not valid UTF-8 never match.
pub fn is_packaging_dir_name(name: &OsStr) -> bool {
    let Some(name) = name.to_str() else {
        return false;
    };
    PACKAGING_DIR_NAMES
        .iter()
        .any(|candidate| name.eq_ignore_ascii_case(candidate))
}
