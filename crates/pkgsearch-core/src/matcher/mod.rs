//! Record matching against query terms.
//!
//! A record is tested by an ordered list of field rules: short name,
//! description, repo, href. Each rule yields an [`Outcome`]. Evaluation stops
//! as soon as a rule aborts, so a missing field excludes the whole record even
//! when an earlier field already matched.

use tracing::trace;

use crate::types::{PackageRecord, QuerySpec};

/// Result of applying one rule to one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Some query term is a substring of the field
    Match,
    /// No query term occurs in the field
    NoMatch,
    /// The field is missing; the record can never match
    AbortRecord,
}

/// Field a rule inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
    Repo,
    Href,
}

impl Field {
    fn extract(self, pkg: &PackageRecord) -> Option<String> {
        match self {
            Field::Name => pkg.name(),
            Field::Description => pkg.description.clone(),
            Field::Repo => pkg.repo.clone(),
            Field::Href => pkg.href.clone(),
        }
    }
}

/// A single matcher rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub field: Field,
}

impl Rule {
    /// Apply the rule to an extracted field value
    pub fn evaluate(query: &QuerySpec, value: Option<&str>) -> Outcome {
        match value {
            None => Outcome::AbortRecord,
            Some(value) if query.any_term_in(&value.to_lowercase()) => Outcome::Match,
            Some(_) => Outcome::NoMatch,
        }
    }

    fn apply(&self, query: &QuerySpec, pkg: &PackageRecord) -> Outcome {
        Self::evaluate(query, self.field.extract(pkg).as_deref())
    }
}

/// Ordered rule set used to filter registry records
#[derive(Debug, Clone)]
pub struct Matcher {
    rules: Vec<Rule>,
}

impl Matcher {
    /// Matcher with the standard field order
    pub fn new() -> Self {
        Self::with_rules(vec![
            Rule { field: Field::Name },
            Rule { field: Field::Description },
            Rule { field: Field::Repo },
            Rule { field: Field::Href },
        ])
    }

    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Decide whether `pkg` satisfies `query`
    pub fn matches(&self, query: &QuerySpec, pkg: &PackageRecord) -> bool {
        // Display all packages if there's no query
        if query.is_empty() {
            return true;
        }

        let mut matched = false;
        for rule in &self.rules {
            match rule.apply(query, pkg) {
                Outcome::AbortRecord => {
                    trace!(field = ?rule.field, repo = ?pkg.repo, "field missing, record excluded");
                    return false;
                }
                Outcome::Match => matched = true,
                Outcome::NoMatch => {}
            }
        }
        matched
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Match `pkg` against `query` with the standard rule order
pub fn matches(query: &QuerySpec, pkg: &PackageRecord) -> bool {
    Matcher::new().matches(query, pkg)
}
