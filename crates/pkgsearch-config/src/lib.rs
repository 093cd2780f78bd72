//! Configuration loading for pkgsearch
//!
//! Settings come from built-in defaults, the global `~/.pkgsearch/config.toml`
//! file, `PKGSEARCH_*` environment variables and command line flags, in
//! increasing order of priority.

pub mod merge;
pub mod toml;

// Re-export main types
pub use merge::{ConfigLayering, ConfigLoader, SearchConfig};
pub use toml::{CacheSection, ConfigFile, RegistrySection};

use pkgsearch_core::error::SearchError;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, SearchError>;
