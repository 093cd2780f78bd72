//! Registry listing parsers
//!
//! Two listing formats are understood: a JSON array of package objects, and
//! the Markdown package page where `#` headings name categories and list
//! items take the form `- [owner/name](url) - description`. Entries that
//! cannot be parsed are skipped; a listing that cannot be read at all yields
//! no records.

use pkgsearch_core::error::SearchError;
use pkgsearch_core::PackageRecord;
use tracing::{debug, warn};

use crate::api::RegistryPackage;
use crate::RegistryResult;

/// Listing format of a registry body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryFormat {
    /// Top-level JSON array of package objects
    Json,
    /// Markdown package page
    Markdown,
}

impl RegistryFormat {
    /// Guess the format from the body itself
    pub fn detect(body: &str) -> Self {
        if body.trim_start().starts_with('[') {
            RegistryFormat::Json
        } else {
            RegistryFormat::Markdown
        }
    }
}

/// Parse a registry body into records, preserving listing order
pub fn parse_listing(body: &str) -> Vec<PackageRecord> {
    let format = RegistryFormat::detect(body);
    let packages = match format {
        RegistryFormat::Json => parse_json(body).unwrap_or_else(|e| {
            warn!(error = %e, "registry listing is unusable");
            Vec::new()
        }),
        RegistryFormat::Markdown => parse_markdown(body),
    };
    debug!(?format, count = packages.len(), "parsed registry listing");
    packages
}

/// Parse a JSON array listing; non-object entries are skipped
pub fn parse_json(body: &str) -> RegistryResult<Vec<PackageRecord>> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| SearchError::Parse {
            message: format!("expected a JSON array of packages: {}", e),
        })?;

    let packages = entries
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, entry)| match serde_json::from_value::<RegistryPackage>(entry) {
                Ok(pkg) => Some(PackageRecord::from(pkg)),
                Err(e) => {
                    debug!(index, error = %e, "skipping malformed registry entry");
                    None
                }
            },
        )
        .collect();

    Ok(packages)
}

/// Parse a Markdown package page
pub fn parse_markdown(body: &str) -> Vec<PackageRecord> {
    let mut category = String::new();
    let mut packages = Vec::new();

    for line in body.lines() {
        let line = line.trim();
        if line.starts_with('#') {
            category = line.trim_start_matches('#').trim().to_string();
            continue;
        }
        if let Some(pkg) = parse_list_item(line, &category) {
            packages.push(pkg);
        }
    }

    packages
}

fn parse_list_item(line: &str, category: &str) -> Option<PackageRecord> {
    let item = line
        .strip_prefix('-')
        .or_else(|| line.strip_prefix('*'))?
        .trim_start();

    let (repo, rest) = item.strip_prefix('[')?.split_once("](")?;
    let (href, rest) = split_link_target(rest)?;
    let (repo, href) = (repo.trim(), href.trim());
    if repo.is_empty() || href.is_empty() {
        return None;
    }

    let description = rest
        .trim()
        .trim_start_matches(|c| c == '-' || c == ':')
        .trim();

    Some(PackageRecord::new(repo, href, description, category))
}

/// Split at the `)` closing a link target; parentheses inside the URL must
/// balance.
fn split_link_target(text: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return Some((&text[..i], &text[i + 1..])),
            ')' => depth -= 1,
            _ => {}
        }
    }
    None
}
