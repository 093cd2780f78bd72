//! Query terms taken from positional arguments.

/// Lowercased query terms. An empty spec matches every package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySpec {
    terms: Vec<String>,
}

impl QuerySpec {
    /// Build a query from raw arguments, lowercasing each term
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: args.into_iter().map(|arg| arg.as_ref().to_lowercase()).collect(),
        }
    }

    /// The lowercased terms in argument order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Check whether any term is a substring of an already-lowercased value
    pub fn any_term_in(&self, lowered: &str) -> bool {
        self.terms.iter().any(|term| lowered.contains(term.as_str()))
    }
}
