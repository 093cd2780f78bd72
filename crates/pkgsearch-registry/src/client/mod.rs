//! HTTP registry client with an optional search cache in front

use reqwest::{Client, ClientBuilder};
use tracing::debug;
use url::Url;

use pkgsearch_core::error::SearchError;
use pkgsearch_core::{PackageRecord, RunOptions};

use crate::cache::CacheStore;
use crate::parse::parse_listing;
use crate::RegistryResult;

/// Package page of the clib wiki
pub const DEFAULT_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/wiki/clibs/clib/Packages.md";

/// How the client uses the search cache during `fetch`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStrategy {
    /// Use a fresh cached listing if present, otherwise fetch and store
    PreferCache,
    /// Always fetch, then store the result
    Refresh,
    /// Never touch the cache
    Disabled,
}

impl CacheStrategy {
    /// Strategy selected by the run options
    pub fn from_options(options: &RunOptions) -> Self {
        if options.use_cache {
            CacheStrategy::PreferCache
        } else {
            CacheStrategy::Refresh
        }
    }

    pub fn reads_cache(self) -> bool {
        matches!(self, CacheStrategy::PreferCache)
    }

    pub fn writes_cache(self) -> bool {
        !matches!(self, CacheStrategy::Disabled)
    }
}

/// Where a registry listing came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSource {
    Cache,
    Network,
}

/// Parsed registry listing in its original order
#[derive(Debug, Clone)]
pub struct Registry {
    url: String,
    source: FetchSource,
    packages: Vec<PackageRecord>,
}

impl Registry {
    /// Parse a raw listing body
    pub fn from_body(url: impl Into<String>, body: &str, source: FetchSource) -> Self {
        Self {
            url: url.into(),
            source,
            packages: parse_listing(body),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn source(&self) -> FetchSource {
        self.source
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Forward iterator over the listing
    pub fn iter(&self) -> std::slice::Iter<'_, PackageRecord> {
        self.packages.iter()
    }
}

impl IntoIterator for Registry {
    type Item = PackageRecord;
    type IntoIter = std::vec::IntoIter<PackageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.packages.into_iter()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a PackageRecord;
    type IntoIter = std::slice::Iter<'a, PackageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Client for fetching the registry listing
#[derive(Debug, Clone)]
pub struct RegistryClient {
    /// Underlying HTTP client
    client: Client,
    /// Search cache, if one is available
    cache: Option<CacheStore>,
    /// Cache usage during fetch
    strategy: CacheStrategy,
}

impl RegistryClient {
    /// Create a client without a cache
    pub fn new() -> RegistryResult<Self> {
        Self::with_config(None, CacheStrategy::Disabled)
    }

    /// Create a client backed by a search cache
    pub fn with_cache(cache: CacheStore, strategy: CacheStrategy) -> RegistryResult<Self> {
        Self::with_config(Some(cache), strategy)
    }

    fn with_config(cache: Option<CacheStore>, strategy: CacheStrategy) -> RegistryResult<Self> {
        let client = ClientBuilder::new()
            .gzip(true)
            .user_agent(concat!("pkgsearch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SearchError::Config {
                field: "http_client".to_string(),
                reason: format!("Failed to create HTTP client: {}", e),
            })?;

        let strategy = if cache.is_some() {
            strategy
        } else {
            CacheStrategy::Disabled
        };

        Ok(Self {
            client,
            cache,
            strategy,
        })
    }

    pub fn strategy(&self) -> CacheStrategy {
        self.strategy
    }

    pub fn cache(&self) -> Option<&CacheStore> {
        self.cache.as_ref()
    }

    /// Fetch and parse the listing at `registry_url`.
    ///
    /// A fresh cached body from the same registry URL is used when the
    /// strategy allows it. A failed live fetch is returned as an error; stale
    /// cache contents are never used as a fallback.
    pub async fn fetch(&self, registry_url: &str) -> RegistryResult<Registry> {
        if let Some(body) = self.cached_body(registry_url) {
            debug!(url = registry_url, "using cached registry listing");
            return Ok(Registry::from_body(registry_url, &body, FetchSource::Cache));
        }

        debug!(url = registry_url, "fetching registry listing");
        let body = self.fetch_body(registry_url).await?;

        if self.strategy.writes_cache() {
            if let Some(cache) = &self.cache {
                cache.write_entry(registry_url, &body);
            }
        }

        Ok(Registry::from_body(registry_url, &body, FetchSource::Network))
    }

    fn cached_body(&self, registry_url: &str) -> Option<String> {
        if !self.strategy.reads_cache() {
            return None;
        }
        let cache = self.cache.as_ref()?;
        if !cache.has_entry() {
            debug!("no search cache entry");
            return None;
        }
        let body = cache.read_fresh_entry(registry_url);
        if body.is_none() {
            debug!(age = ?cache.entry_age(), "search cache entry not usable");
        }
        body
    }

    async fn fetch_body(&self, registry_url: &str) -> RegistryResult<String> {
        let url = Url::parse(registry_url)
            .map_err(|e| SearchError::fetch(registry_url, "invalid registry URL".to_string(), e))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::fetch(registry_url, format!("request failed: {}", e), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Fetch {
                url: registry_url.to_string(),
                message: format!("registry returned status {}", status),
                source: None,
            });
        }

        response
            .text()
            .await
            .map_err(|e| SearchError::fetch(registry_url, format!("failed to read body: {}", e), e))
    }
}
