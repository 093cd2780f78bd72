//! # pkgsearch-core
//!
//! Core types and utilities shared across all pkgsearch crates.
//!
//! This crate provides:
//! - PackageRecord, QuerySpec and RunOptions types
//! - SearchError enum for unified error handling
//! - The record matcher used to filter registry listings
//! - Utility functions for common operations
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Core data types (PackageRecord, QuerySpec, etc.)
//! - `error`: Error types and result aliases
//! - `matcher`: Ordered matcher rules over package fields
//! - `utils`: Utility functions and helpers

pub mod error;
pub mod matcher;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{SearchError, SearchResult};
pub use matcher::{matches, Matcher, Outcome};
pub use types::{PackageRecord, QuerySpec, RunOptions};
