//! Configuration layering, fallback logic, and environment overrides

use std::collections::HashMap;

use camino::Utf8PathBuf;
use pkgsearch_core::error::SearchError;
use tracing::debug;
use url::Url;

use crate::toml::ConfigFile;
use crate::ConfigResult;

/// Environment variable overriding the registry URL
pub const ENV_REGISTRY_URL: &str = "PKGSEARCH_REGISTRY_URL";
/// Environment variable overriding the cache directory
pub const ENV_CACHE_DIR: &str = "PKGSEARCH_CACHE_DIR";
/// Environment variable disabling the cache when set to any value
pub const ENV_NO_CACHE: &str = "PKGSEARCH_NO_CACHE";

/// Fully resolved settings for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Registry listing URL; `None` selects the built-in registry
    pub registry_url: Option<String>,
    /// Cache directory; `None` selects the platform cache directory
    pub cache_dir: Option<Utf8PathBuf>,
    /// Whether the search cache is used at all
    pub cache_enabled: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            registry_url: None,
            cache_dir: None,
            cache_enabled: true,
        }
    }
}

/// Main configuration loading interface
pub struct ConfigLoader {
    /// Global config file location
    config_path: Option<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Loader for `~/.pkgsearch/config.toml`
    pub fn global() -> Self {
        let config_path = dirs::home_dir()
            .and_then(|home| Utf8PathBuf::try_from(home).ok())
            .map(|home| home.join(".pkgsearch").join("config.toml"));
        Self { config_path }
    }

    /// Loader for an explicit config file
    pub fn with_path(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            config_path: Some(path.into()),
        }
    }

    pub fn config_path(&self) -> Option<&Utf8PathBuf> {
        self.config_path.as_ref()
    }

    /// Load the config file if it exists
    pub async fn load_file(&self) -> ConfigResult<Option<ConfigFile>> {
        match &self.config_path {
            Some(path) if path.exists() => {
                debug!(%path, "loading config file");
                crate::toml::load_from_file(path).await.map(Some)
            }
            _ => Ok(None),
        }
    }

    /// Resolve settings from every layer
    pub async fn load(&self, cli_overrides: HashMap<String, String>) -> ConfigResult<SearchConfig> {
        let file = self.load_file().await?;
        ConfigLayering::merge_configs(file, ConfigLayering::collect_env_overrides(), cli_overrides)
    }
}

/// Configuration layering and merging
pub struct ConfigLayering;

impl ConfigLayering {
    /// Merge file, environment and CLI layers over the defaults
    pub fn merge_configs(
        file: Option<ConfigFile>,
        env_overrides: HashMap<String, String>,
        cli_overrides: HashMap<String, String>,
    ) -> ConfigResult<SearchConfig> {
        let mut merged = SearchConfig::default();

        if let Some(file) = file {
            if let Some(url) = file.registry.url {
                merged.registry_url = Some(validate_url("registry.url", url)?);
            }
            if let Some(enabled) = file.cache.enabled {
                merged.cache_enabled = enabled;
            }
            merged.cache_dir = file.cache.dir.or(merged.cache_dir);
        }

        Self::apply_env_overrides(&mut merged, &env_overrides)?;

        // CLI flag overrides (highest priority)
        Self::apply_cli_overrides(&mut merged, &cli_overrides)?;

        Ok(merged)
    }

    fn apply_env_overrides(
        config: &mut SearchConfig,
        overrides: &HashMap<String, String>,
    ) -> ConfigResult<()> {
        for (key, value) in overrides {
            match key.as_str() {
                ENV_REGISTRY_URL => {
                    config.registry_url = Some(validate_url(ENV_REGISTRY_URL, value.clone())?);
                }
                ENV_CACHE_DIR => {
                    config.cache_dir = Some(Utf8PathBuf::from(value));
                }
                ENV_NO_CACHE => {
                    config.cache_enabled = false;
                }
                _ => {
                    // Unknown environment variable, ignore
                }
            }
        }

        Ok(())
    }

    fn apply_cli_overrides(
        config: &mut SearchConfig,
        overrides: &HashMap<String, String>,
    ) -> ConfigResult<()> {
        if let Some(url) = overrides.get("registry") {
            config.registry_url = Some(validate_url("--registry", url.clone())?);
        }
        Ok(())
    }

    /// Collect `PKGSEARCH_*` environment variables
    pub fn collect_env_overrides() -> HashMap<String, String> {
        std::env::vars()
            .filter(|(key, _)| key.starts_with("PKGSEARCH_"))
            .collect()
    }
}

fn validate_url(field: &str, url: String) -> ConfigResult<String> {
    Url::parse(&url).map_err(|e| SearchError::Config {
        field: field.to_string(),
        reason: format!("'{}' is not a valid URL: {}", url, e),
    })?;
    Ok(url)
}
