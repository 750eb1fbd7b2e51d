//! DNS tampering detector: resolve a set of domains through the local
//! network path, look up who operates every answered address, and compare
//! against the operators each domain is expected to run on.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dnspect::{Checker, CheckerConfig, DomainSpec, OwnershipClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = OwnershipClient::builder(vec![
//!         "https://uapis.cn/api/v1/network/ipinfo?ip=".to_string(),
//!     ])
//!     .requests_per_second(2)
//!     .build();
//!
//!     let checker = Checker::new(client, CheckerConfig::default());
//!     let results = checker
//!         .run(vec![DomainSpec::new("example.com", vec!["EDGECAST".into()])])
//!         .await;
//!
//!     let summary = dnspect::summarize(&results);
//!     println!("{} of {} polluted ({})", summary.polluted, summary.total, summary.level);
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/dnspect/0.3.0")]

// Re-export core types
pub use dnspect_core::*;

// Re-export the network clients
pub use dnspect_client::{
    DomainResolver, LabelSource, OwnershipClient, OwnershipClientBuilder, RequestGate, RetryConfig,
};

// Re-export the orchestrator
pub use dnspect_checker::{Checker, CheckerConfig};

// Re-export runtime for convenience
pub use serde_json;
pub use tokio;
