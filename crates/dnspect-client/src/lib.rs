//! Network-facing building blocks of the dnspect pipeline.
//!
//! - [`DomainResolver`]: IPv4 resolution through the system name service
//! - [`OwnershipClient`]: per-IP operator lookup with multi-endpoint
//!   fallback, retry with exponential backoff, and a shared rate gate
//! - [`RequestGate`]: the global token bucket bounding the aggregate
//!   outbound request rate
//! - [`LabelSource`]: the trait seam the orchestrator consumes

#![doc(html_root_url = "https://docs.rs/dnspect-client/0.3.0")]

mod config;
mod limiter;
mod lookup;
pub mod probe;
mod resolver;
mod source;

pub use config::RetryConfig;
pub use limiter::RequestGate;
pub use lookup::{OwnershipClient, OwnershipClientBuilder};
pub use resolver::DomainResolver;
pub use source::LabelSource;
