//! # dnspect-cli
//!
//! Command-line front end for the dnspect pipeline.
//!
//! Loads a YAML domain list, runs the concurrent checking pipeline, and
//! renders a plain-text pollution report to the terminal and to disk.

pub mod cli;
pub mod config;
pub mod report;

pub use cli::run;
