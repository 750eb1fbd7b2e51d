//! Seam between the orchestrator and the ownership lookup backend.

use async_trait::async_trait;
use dnspect_core::Result;
use std::net::Ipv4Addr;

/// Anything that can resolve an IP address to an operator label.
///
/// The production implementation is [`OwnershipClient`](crate::OwnershipClient);
/// tests substitute scripted sources to exercise the pipeline without a
/// network.
#[async_trait]
pub trait LabelSource: Send + Sync {
    /// Resolve one IP address to its operator label
    async fn lookup(&self, ip: Ipv4Addr) -> Result<String>;
}

#[async_trait]
impl LabelSource for crate::OwnershipClient {
    async fn lookup(&self, ip: Ipv4Addr) -> Result<String> {
        Self::lookup(self, ip).await
    }
}
