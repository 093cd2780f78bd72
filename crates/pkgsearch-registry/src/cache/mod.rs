//! On-disk search cache with a fixed retention window
//!
//! A single entry lives under the "search" namespace and holds the raw body of
//! the last successful registry fetch together with the URL it came from.
//! Reads and writes are fail-soft: errors are logged at debug level and
//! surface to callers as a cache miss.

use std::fs;
use std::process;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use pkgsearch_core::error::SearchError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::RegistryResult;

/// Retention window for the search cache (one day)
pub const SEARCH_CACHE_RETENTION: Duration = Duration::from_secs(24 * 60 * 60);

/// Namespace of the single search cache entry
const SEARCH_NAMESPACE: &str = "search";

/// Stored registry payload with its write time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Registry URL the payload was fetched from
    #[serde(default)]
    pub url: String,
    /// Raw registry body
    pub payload: String,
    /// When the entry was written
    pub timestamp: DateTime<Utc>,
}

impl CacheEntry {
    /// Create an entry stamped with the current time
    pub fn new(url: impl Into<String>, payload: impl Into<String>) -> Self {
        Self::with_timestamp(url, payload, Utc::now())
    }

    /// Create an entry with an explicit write time
    pub fn with_timestamp(
        url: impl Into<String>,
        payload: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            url: url.into(),
            payload: payload.into(),
            timestamp,
        }
    }

    /// Age of the entry at `now`
    pub fn age_at(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.timestamp
    }

    /// Fresh iff `now - timestamp < retention`
    pub fn is_fresh_at(&self, now: DateTime<Utc>, retention: Duration) -> bool {
        match chrono::Duration::from_std(retention) {
            Ok(retention) => self.age_at(now) < retention,
            // Retention beyond chrono's range never expires
            Err(_) => true,
        }
    }

    /// Check if the entry is still fresh
    pub fn is_fresh(&self, retention: Duration) -> bool {
        self.is_fresh_at(Utc::now(), retention)
    }
}

/// File-backed store for the search cache entry
#[derive(Debug, Clone)]
pub struct CacheStore {
    /// Directory holding the cache file
    dir: Utf8PathBuf,
    /// Freshness window
    retention: Duration,
}

impl CacheStore {
    /// Create a store rooted at `dir` with the given retention window
    pub fn new<P: AsRef<Utf8Path>>(dir: P, retention: Duration) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            retention,
        }
    }

    /// Store under the platform cache directory (`<cache>/pkgsearch`)
    pub fn default_location() -> Option<Self> {
        let base = dirs::cache_dir()?;
        let base = Utf8PathBuf::try_from(base).ok()?;
        Some(Self::new(base.join("pkgsearch"), SEARCH_CACHE_RETENTION))
    }

    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    pub fn retention(&self) -> Duration {
        self.retention
    }

    /// Path of the search cache file
    pub fn path(&self) -> Utf8PathBuf {
        self.dir.join(format!("{}.json", SEARCH_NAMESPACE))
    }

    /// Whether an entry exists, regardless of age
    pub fn has_entry(&self) -> bool {
        self.path().is_file()
    }

    /// Stored payload of any age, or `None` on a miss or read failure
    pub fn read_entry(&self) -> Option<String> {
        self.load().map(|entry| entry.payload)
    }

    /// Stored payload if it was fetched from `url` and is still within the
    /// retention window
    pub fn read_fresh_entry(&self, url: &str) -> Option<String> {
        let entry = self.load()?;
        if entry.url != url {
            debug!(
                cached = %entry.url,
                requested = url,
                "search cache holds another registry"
            );
            return None;
        }
        if !entry.is_fresh(self.retention) {
            debug!("search cache is stale");
            return None;
        }
        Some(entry.payload)
    }

    /// Whether a fresh entry exists
    pub fn is_fresh(&self) -> bool {
        self.load()
            .map(|entry| entry.is_fresh(self.retention))
            .unwrap_or(false)
    }

    /// Age of the stored entry, if any
    pub fn entry_age(&self) -> Option<chrono::Duration> {
        self.load().map(|entry| entry.age_at(Utc::now()))
    }

    /// Store `payload` fetched from `url`, stamped with the current time.
    ///
    /// Best-effort: a failed write is logged and otherwise ignored.
    pub fn write_entry(&self, url: &str, payload: &str) {
        match self.store_entry(&CacheEntry::new(url, payload)) {
            Ok(()) => debug!(path = %self.path(), "wrote search cache"),
            Err(e) => debug!(error = %e, "ignoring search cache write failure"),
        }
    }

    /// Replace the stored entry via a temp file and rename
    pub fn store_entry(&self, entry: &CacheEntry) -> RegistryResult<()> {
        let path = self.path();
        let write_error = |message: String| SearchError::CacheWrite {
            path: path.to_string(),
            message,
        };

        fs::create_dir_all(&self.dir)
            .map_err(|e| write_error(format!("failed to create cache directory: {}", e)))?;

        let serialized = serde_json::to_string(entry)
            .map_err(|e| write_error(format!("failed to serialize entry: {}", e)))?;

        let temp_path = self
            .dir
            .join(format!("{}.json.{}.tmp", SEARCH_NAMESPACE, process::id()));
        fs::write(&temp_path, serialized)
            .map_err(|e| write_error(format!("failed to write temp file: {}", e)))?;

        if let Err(e) = fs::rename(&temp_path, &path) {
            let _ = fs::remove_file(&temp_path);
            return Err(write_error(format!("failed to replace cache file: {}", e)));
        }

        Ok(())
    }

    fn load(&self) -> Option<CacheEntry> {
        if !self.has_entry() {
            return None;
        }
        match self.try_load() {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!(error = %e, "treating unreadable search cache as a miss");
                None
            }
        }
    }

    fn try_load(&self) -> RegistryResult<CacheEntry> {
        let path = self.path();
        let contents = fs::read_to_string(&path).map_err(|e| SearchError::CacheRead {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&contents).map_err(|e| SearchError::CacheRead {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests;
