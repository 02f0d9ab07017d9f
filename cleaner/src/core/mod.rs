//! Deterministic, pure logic shared by the cleaner.
//!
//! Core modules must be free of I/O side effects.

pub mod matcher;
