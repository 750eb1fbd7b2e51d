//! Core types for the dnspect DNS tampering checker.
//!
//! This crate holds the pure heart of the pipeline:
//!
//! - **Types**: [`DomainSpec`], [`IpCheckResult`], [`DomainResult`], [`RunSummary`]
//! - **Errors**: failure classification with [`CheckError`]
//! - **Aggregation**: [`aggregate`] reduces per-address outcomes into one verdict
//! - **Summary**: [`summarize`] reduces all verdicts into run totals
//!
//! Nothing in here performs I/O; every function is a deterministic mapping
//! from inputs to outputs, which keeps verdicts replayable in tests.

#![doc(html_root_url = "https://docs.rs/dnspect-core/0.3.0")]

pub mod aggregate;
mod error;
pub mod summary;
pub mod types;

pub use aggregate::{aggregate, label_matches};
pub use error::{CheckError, Result};
pub use summary::{summarize, PollutionLevel, RunSummary};
pub use types::*;
