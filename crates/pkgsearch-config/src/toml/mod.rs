//! Global config file parsing
//!
//! ```toml
//! [registry]
//! url = "https://example.com/packages.json"
//!
//! [cache]
//! enabled = true
//! dir = "/var/cache/pkgsearch"
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use pkgsearch_core::error::SearchError;
use serde::{Deserialize, Serialize};

use crate::ConfigResult;

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub registry: RegistrySection,
    #[serde(default)]
    pub cache: CacheSection,
}

/// `[registry]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrySection {
    /// Registry listing URL
    pub url: Option<String>,
}

/// `[cache]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheSection {
    /// Set to false to never read or write the search cache
    pub enabled: Option<bool>,
    /// Directory for the search cache
    pub dir: Option<Utf8PathBuf>,
}

/// Parse config file contents
pub fn parse_config(content: &str) -> ConfigResult<ConfigFile> {
    ::toml::from_str(content).map_err(|e| SearchError::Config {
        field: "config.toml".to_string(),
        reason: e.message().to_string(),
    })
}

/// Read and parse a config file
pub async fn load_from_file(path: &Utf8Path) -> ConfigResult<ConfigFile> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SearchError::io(format!("Failed to read {}", path), e))?;

    parse_config(&content).map_err(|e| match e {
        SearchError::Config { field, reason } => SearchError::Config {
            field,
            reason: format!("In file {}: {}", path, reason),
        },
        other => other,
    })
}
