//! Utility functions and helpers.
//!
//! Common functionality used across multiple pkgsearch crates.

pub mod name;

// Re-export commonly used utilities
pub use name::parse_name;
