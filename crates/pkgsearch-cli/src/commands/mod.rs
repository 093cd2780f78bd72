//! Command implementations and shared context.
//!
//! pkgsearch has a single command: search the registry and render the
//! matching packages.

use std::collections::HashMap;

use pkgsearch_config::{ConfigLoader, SearchConfig};
use pkgsearch_core::error::SearchResult;
use pkgsearch_core::RunOptions;
use tracing::debug;

pub mod search;


/// Shared context for a run
pub struct CommandContext {
    pub options: RunOptions,
    pub config: SearchConfig,
}

impl CommandContext {
    /// Create a context, loading configuration from every layer
    pub async fn new(
        options: RunOptions,
        cli_overrides: HashMap<String, String>,
    ) -> SearchResult<Self> {
        let config = ConfigLoader::global().load(cli_overrides).await?;
        debug!(?options, ?config, "resolved run configuration");

        Ok(Self { options, config })
    }
}
