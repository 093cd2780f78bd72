//! Error types and result aliases for pkgsearch operations.
//!
//! Provides a unified error type covering registry retrieval, the search
//! cache, configuration and I/O. Only `Fetch`, `Config` and `Io` are fatal to
//! a run; cache and parse errors are absorbed by the component that raises
//! them.

use thiserror::Error;

/// Unified error type for all pkgsearch operations
#[derive(Error, Debug)]
pub enum SearchError {
    // Registry errors
    #[error("Failed to fetch registry {url}: {message}")]
    Fetch {
        url: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Failed to parse registry listing: {message}")]
    Parse { message: String },

    // Cache errors
    #[error("Failed to read search cache {path}: {message}")]
    CacheRead { path: String, message: String },

    #[error("Failed to write search cache {path}: {message}")]
    CacheWrite { path: String, message: String },

    // Config errors
    #[error("Configuration field '{field}' is invalid: {reason}")]
    Config { field: String, reason: String },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for pkgsearch operations
pub type SearchResult<T> = Result<T, SearchError>;

impl SearchError {
    /// Create a fetch error from any error type
    pub fn fetch<E>(url: &str, message: String, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Fetch {
            url: url.to_string(),
            message,
            source: Some(Box::new(source)),
        }
    }

    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }
}
