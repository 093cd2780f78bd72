//! Core data types for pkgsearch.
//!
//! This module provides the fundamental types used throughout the workspace:
//! - Package records as listed by a registry
//! - Query terms taken from the command line
//! - Per-run options

pub mod options;
pub mod package;
pub mod query;

// Re-export all public types
pub use options::RunOptions;
pub use package::PackageRecord;
pub use query::QuerySpec;
