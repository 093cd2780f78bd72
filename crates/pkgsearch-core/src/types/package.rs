//! Package record types.
//!
//! Defines the structure of a single registry listing entry.

use serde::{Deserialize, Serialize};

use crate::utils::parse_name;

/// One package as listed by the registry
///
/// Fields are optional because upstream listings can be malformed; the
/// matcher treats a missing field as a hard non-match for the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    /// Repository in "owner/name" form
    #[serde(default)]
    pub repo: Option<String>,
    /// Package URL
    #[serde(default)]
    pub href: Option<String>,
    /// Free-form description, possibly empty
    #[serde(default)]
    pub description: Option<String>,
    /// Registry category, possibly empty
    #[serde(default)]
    pub category: Option<String>,
}

impl PackageRecord {
    /// Create a record with every field present
    pub fn new(
        repo: impl Into<String>,
        href: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            repo: Some(repo.into()),
            href: Some(href.into()),
            description: Some(description.into()),
            category: Some(category.into()),
        }
    }

    /// Short display name derived from `repo`, absent only when `repo` is
    pub fn name(&self) -> Option<String> {
        self.repo.as_deref().map(parse_name)
    }

    pub fn repo_or_empty(&self) -> &str {
        self.repo.as_deref().unwrap_or_default()
    }

    pub fn href_or_empty(&self) -> &str {
        self.href.as_deref().unwrap_or_default()
    }

    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn category_or_empty(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }
}
