//! `pkgsearch [query ...]` implementation.
//!
//! Fetches the registry listing, keeps the packages that match the query and
//! renders them to stdout.

use std::io::{self, Write};

use pkgsearch_config::SearchConfig;
use pkgsearch_core::error::SearchResult;
use pkgsearch_core::{Matcher, QuerySpec, RunOptions};
use pkgsearch_registry::{
    CacheStore, CacheStrategy, RegistryClient, DEFAULT_REGISTRY_URL, SEARCH_CACHE_RETENTION,
};
use tracing::debug;

use super::CommandContext;
use crate::output::{ColorSupport, OutputMode, Renderer};

/// Execute a search and print the results
pub async fn execute(query: QuerySpec, ctx: &CommandContext) -> SearchResult<()> {
    let client = build_client(&ctx.config, &ctx.options)?;
    let url = registry_url(&ctx.config);
    let colors = ColorSupport::for_run(ctx.options.color);

    let stdout = io::stdout();
    let shown = search(&client, url, &query, &ctx.options, colors, stdout.lock()).await?;
    debug!(shown, "search complete");

    Ok(())
}

/// Fetch, filter and render; returns the number of packages rendered.
///
/// Nothing is written to `out` unless the fetch succeeds.
pub async fn search<W: Write>(
    client: &RegistryClient,
    url: &str,
    query: &QuerySpec,
    options: &RunOptions,
    colors: ColorSupport,
    out: W,
) -> SearchResult<usize> {
    let registry = client.fetch(url).await?;
    debug!(
        count = registry.len(),
        source = ?registry.source(),
        "found packages"
    );

    let matcher = Matcher::new();
    let mut renderer = Renderer::new(out, OutputMode::from_options(options), colors);
    renderer.begin()?;

    for pkg in &registry {
        if matcher.matches(query, pkg) {
            renderer.push(pkg)?;
        } else {
            debug!(repo = pkg.repo_or_empty(), "skipped package");
        }
    }

    renderer.finish()
}

/// Registry listing URL for this run
pub fn registry_url(config: &SearchConfig) -> &str {
    config.registry_url.as_deref().unwrap_or(DEFAULT_REGISTRY_URL)
}

/// Build the registry client with the cache the configuration allows
pub fn build_client(config: &SearchConfig, options: &RunOptions) -> SearchResult<RegistryClient> {
    if !config.cache_enabled {
        debug!("search cache disabled by configuration");
        return RegistryClient::new();
    }

    let cache = match &config.cache_dir {
        Some(dir) => Some(CacheStore::new(dir, SEARCH_CACHE_RETENTION)),
        None => CacheStore::default_location(),
    };

    match cache {
        Some(cache) => {
            debug!(path = %cache.path(), "using search cache");
            RegistryClient::with_cache(cache, CacheStrategy::from_options(options))
        }
        None => {
            debug!("no cache directory available");
            RegistryClient::new()
        }
    }
}
