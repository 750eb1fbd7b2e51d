/// One domain to check, as loaded from the site list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSpec {
    /// Domain name to resolve
    pub name: String,

    /// Expected operator label prefixes, in priority order.
    ///
    /// Matching is a case-sensitive prefix comparison: `AMAZON` matches
    /// `AMAZON-02`. Never empty for a configured domain; the loader
    /// enforces this.
    pub expected: Vec<String>,
}

impl DomainSpec {
    /// Create a new domain spec
    #[must_use]
    pub fn new(name: impl Into<String>, expected: Vec<String>) -> Self {
        Self {
            name: name.into(),
            expected,
        }
    }
}

/// Aggregation policy over a domain's resolved addresses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// The domain is clean if at least one address matches
    #[default]
    Lenient,
    /// The domain is clean only if every address matches
    Strict,
}
