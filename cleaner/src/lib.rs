//! Removes generated packaging directories (`debian/`, `rpm/`) from a code tree.
//!
//! The packaging generator recreates these directories on its next run, so
//! clearing them first guarantees it starts from a clean slate.
//!
//! - **[`core`]**: Pure name matching. No I/O.
//! - **[`io`]**: The pruning filesystem walk and forced deletion.
//!
//! [`clean`] ties configuration, the walk, and product output together.

pub mod clean;
pub mod config;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
