//! Concurrent domain-checking orchestration for dnspect.
//!
//! Fans one task out per domain under a bounded concurrency limit,
//! resolves each name, looks up every address's operator, and fans the
//! per-domain verdicts back in. See [`Checker`].

#![doc(html_root_url = "https://docs.rs/dnspect-checker/0.3.0")]

mod checker;

pub use checker::{Checker, CheckerConfig};
