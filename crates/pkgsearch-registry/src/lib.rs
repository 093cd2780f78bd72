//! Registry client for pkgsearch
//!
//! This crate fetches the package listing from a remote registry, keeps the
//! last successful response in an on-disk search cache, and parses listings
//! into ordered package records.

pub mod api;
pub mod cache;
pub mod client;
pub mod parse;

// Re-export main types
pub use api::RegistryPackage;
pub use cache::{CacheEntry, CacheStore, SEARCH_CACHE_RETENTION};
pub use client::{CacheStrategy, FetchSource, Registry, RegistryClient, DEFAULT_REGISTRY_URL};
pub use parse::{parse_listing, RegistryFormat};

use pkgsearch_core::error::SearchError;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, SearchError>;
