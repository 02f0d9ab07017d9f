//! Filesystem side effects for the cleaner.

pub mod sweep;
