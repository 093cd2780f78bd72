//! JSON registry response types

use pkgsearch_core::PackageRecord;
use serde::{Deserialize, Serialize};

/// One entry of a JSON registry listing
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegistryPackage {
    /// Repository slug ("owner/name")
    pub repo: Option<String>,
    /// Package URL
    #[serde(alias = "url")]
    pub href: Option<String>,
    /// Package description
    pub description: Option<String>,
    /// Listing category
    pub category: Option<String>,
}

impl From<RegistryPackage> for PackageRecord {
    fn from(pkg: RegistryPackage) -> Self {
        PackageRecord {
            repo: pkg.repo,
            href: pkg.href,
            description: pkg.description,
            category: pkg.category,
        }
    }
}
