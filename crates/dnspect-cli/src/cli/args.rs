//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Default ownership lookup endpoint; the IP literal is appended
pub const DEFAULT_ENDPOINT: &str = "https://uapis.cn/api/v1/network/ipinfo?ip=";

/// Detect DNS response tampering by verifying who operates the addresses
/// your DNS path answers with.
///
/// Each configured domain is resolved through the system resolver, every
/// answered IPv4 address is looked up against an ownership API, and the
/// returned operator label is compared with the domain's expected
/// operator prefixes. Mismatches mean the answer was substituted.
#[derive(Parser, Debug)]
#[command(name = "dnspect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Ownership API endpoints, highest priority first (comma-separated;
    /// the IP literal is appended to each)
    #[arg(
        long = "api",
        value_name = "URL",
        value_delimiter = ',',
        default_value = DEFAULT_ENDPOINT
    )]
    pub endpoints: Vec<String>,

    /// How many domains to check concurrently
    #[arg(short = 'c', long, default_value_t = 2)]
    pub concurrency: usize,

    /// Strict mode: every resolved address must match an expected operator
    #[arg(long)]
    pub strict: bool,

    /// Domain list file (YAML)
    #[arg(short = 'f', long = "config", value_name = "FILE", default_value = "sites.yaml")]
    pub config: PathBuf,

    /// Per-request and per-resolution timeout, in seconds
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub timeout: u64,

    /// Report output path (defaults to a timestamped file in the working
    /// directory)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Maximum ownership requests per second across the whole run
    /// (0 disables rate limiting)
    #[arg(long, default_value_t = 2)]
    pub rps: u32,

    /// Maximum retries per endpoint on transient failures
    #[arg(long = "retry", value_name = "N", default_value_t = 2)]
    pub max_retries: u32,

    /// Increase log verbosity
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_contract() {
        let cli = Cli::parse_from(["dnspect"]);
        assert_eq!(cli.endpoints, vec![DEFAULT_ENDPOINT.to_string()]);
        assert_eq!(cli.concurrency, 2);
        assert!(!cli.strict);
        assert_eq!(cli.config, PathBuf::from("sites.yaml"));
        assert_eq!(cli.timeout, 10);
        assert_eq!(cli.rps, 2);
        assert_eq!(cli.max_retries, 2);
    }

    #[test]
    fn api_flag_splits_on_commas_in_priority_order() {
        let cli = Cli::parse_from([
            "dnspect",
            "--api",
            "https://one.example/ip?q=,https://two.example/ip?q=",
        ]);
        assert_eq!(cli.endpoints.len(), 2);
        assert_eq!(cli.endpoints[0], "https://one.example/ip?q=");
        assert_eq!(cli.endpoints[1], "https://two.example/ip?q=");
    }
}
