//! Domain resolution through the environment's configured name service.

use dnspect_core::{CheckError, Result};
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use tracing::debug;

/// Resolves domain names to their IPv4 address sets.
///
/// Resolution goes through the operating system's configured resolver on
/// purpose: the product observes whatever DNS answer the current network
/// path produces, including a substituted one. Pointing this at a fixed
/// upstream would defeat the measurement.
#[derive(Debug, Clone)]
pub struct DomainResolver {
    timeout: Duration,
}

impl DomainResolver {
    /// Create a resolver with the given per-lookup timeout
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Resolve a name to its IPv4 addresses, in answer order.
    ///
    /// Returns [`CheckError::Resolution`] when the lookup fails or exceeds
    /// the timeout, and [`CheckError::NoIpv4`] when the name resolves but
    /// yields no IPv4 address.
    pub async fn resolve_ipv4(&self, name: &str) -> Result<Vec<Ipv4Addr>> {
        let target = format!("{name}:0");
        let lookup = tokio::net::lookup_host(target);

        let addrs = tokio::time::timeout(self.timeout, lookup)
            .await
            .map_err(|_| CheckError::Resolution {
                domain: name.to_string(),
                reason: format!("timed out after {}s", self.timeout.as_secs()),
            })?
            .map_err(|e| CheckError::Resolution {
                domain: name.to_string(),
                reason: e.to_string(),
            })?;

        let mut ips: Vec<Ipv4Addr> = Vec::new();
        for addr in addrs {
            if let IpAddr::V4(v4) = addr.ip() {
                if !ips.contains(&v4) {
                    ips.push(v4);
                }
            }
        }

        if ips.is_empty() {
            return Err(CheckError::NoIpv4 {
                domain: name.to_string(),
            });
        }

        debug!(domain = name, addresses = ips.len(), "resolved");
        Ok(ips)
    }
}
