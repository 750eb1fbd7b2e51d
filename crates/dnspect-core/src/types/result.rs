use crate::error::CheckError;
use crate::types::DomainSpec;
use std::net::Ipv4Addr;

/// Outcome of one ownership lookup for one resolved address.
///
/// `outcome` is `Ok` with the operator label iff the lookup succeeded;
/// a failed lookup carries the error instead. Produced once, never mutated.
#[derive(Debug)]
pub struct IpCheckResult {
    /// The resolved IPv4 address
    pub ip: Ipv4Addr,
    /// Operator label, or the failure that prevented obtaining one
    pub outcome: Result<String, CheckError>,
}

impl IpCheckResult {
    /// Create a result for a successful lookup
    #[must_use]
    pub fn labeled(ip: Ipv4Addr, label: impl Into<String>) -> Self {
        Self {
            ip,
            outcome: Ok(label.into()),
        }
    }

    /// Create a result for a failed lookup
    #[must_use]
    pub const fn failed(ip: Ipv4Addr, error: CheckError) -> Self {
        Self {
            ip,
            outcome: Err(error),
        }
    }

    /// The operator label, if the lookup succeeded
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.outcome.as_deref().ok()
    }
}

/// Fixed verdict vocabulary consumed by the report renderer.
///
/// One tag per (mode × outcome), plus the resolution failure cases. The
/// renderer relies on this being closed; do not add free-text variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Strict mode: every address matched an expected operator
    StrictClean,
    /// Strict mode: at least one address fell outside the expected operators
    StrictPolluted,
    /// Lenient mode: at least one address matched an expected operator
    LenientClean,
    /// Lenient mode: no address matched an expected operator
    LenientPolluted,
    /// Name resolution failed outright
    ResolutionFailed,
    /// Name resolution returned no IPv4 addresses
    NoAddresses,
}

impl Verdict {
    /// Whether this verdict marks the domain as polluted
    #[must_use]
    pub const fn is_polluted(self) -> bool {
        !matches!(self, Self::StrictClean | Self::LenientClean)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Self::StrictClean => "all addresses match the expected operators",
            Self::StrictPolluted => "some addresses fall outside the expected operators",
            Self::LenientClean => "at least one address matches the expected operators",
            Self::LenientPolluted => "no address matches the expected operators",
            Self::ResolutionFailed => "DNS resolution failed",
            Self::NoAddresses => "no IPv4 addresses returned",
        };
        f.write_str(tag)
    }
}

/// Final pollution verdict for one checked domain
#[derive(Debug)]
pub struct DomainResult {
    /// Domain name from the spec
    pub domain: String,
    /// Expected operator label prefixes, copied from the spec
    pub expected: Vec<String>,
    /// Per-address outcomes, in resolution order
    pub ip_results: Vec<IpCheckResult>,
    /// Whether the domain is considered polluted
    pub polluted: bool,
    /// Fixed summary tag for the report
    pub verdict: Verdict,
}

impl DomainResult {
    /// Build the result for a domain whose name resolution failed.
    ///
    /// An unresolvable name under a possibly compromised DNS path is
    /// treated as pollution evidence, not skipped.
    #[must_use]
    pub fn unresolved(spec: DomainSpec, verdict: Verdict) -> Self {
        Self {
            domain: spec.name,
            expected: spec.expected,
            ip_results: Vec::new(),
            polluted: true,
            verdict,
        }
    }
}
