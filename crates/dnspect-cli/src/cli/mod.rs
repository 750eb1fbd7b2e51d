//! CLI argument parsing and run wiring.

pub mod args;

use anyhow::{bail, Context, Result};
use args::Cli;
use clap::Parser;
use colored::Colorize;
use dnspect::{
    summarize, Checker, CheckerConfig, MatchMode, OwnershipClient, PollutionLevel, RetryConfig,
};
use std::time::Duration;
use tracing::info;

use crate::config;
use crate::report;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let specs = config::load_domains(&cli.config)?;
    let endpoints = validate_endpoints(&cli.endpoints)?;
    info!(domains = specs.len(), endpoints = endpoints.len(), "starting check");

    let client = OwnershipClient::builder(endpoints)
        .timeout(Duration::from_secs(cli.timeout))
        .retry(RetryConfig::new().max_retries(cli.max_retries))
        .requests_per_second(cli.rps)
        .build();

    let mode = if cli.strict {
        MatchMode::Strict
    } else {
        MatchMode::Lenient
    };
    let checker = Checker::new(
        client,
        CheckerConfig {
            concurrency: cli.concurrency,
            mode,
            resolve_timeout: Duration::from_secs(cli.timeout),
        },
    );

    let results = checker.run(specs).await;
    let summary = summarize(&results);

    let rendered = report::render(&summary, &results);
    print!("{rendered}");

    let severity = match summary.level {
        PollutionLevel::Normal => "normal".green().bold(),
        PollutionLevel::Mild => "mild".yellow().bold(),
        PollutionLevel::Moderate => "moderate".yellow().bold(),
        PollutionLevel::Severe => "severe".red().bold(),
    };
    println!("{} {}", "Overall severity:".bold(), severity);

    let path = cli.output.unwrap_or_else(report::default_path);
    report::write(&rendered, &path)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    println!("Report saved to {}", path.display());

    Ok(())
}

/// Trim and validate the endpoint priority list before any work starts.
fn validate_endpoints(raw: &[String]) -> Result<Vec<String>> {
    let mut endpoints = Vec::with_capacity(raw.len());
    for entry in raw {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let parsed = url::Url::parse(entry)
            .with_context(|| format!("invalid API endpoint: {entry}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("API endpoint must be http(s): {entry}");
        }
        endpoints.push(entry.to_string());
    }
    if endpoints.is_empty() {
        bail!("no usable API endpoint configured");
    }
    Ok(endpoints)
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "dnspect=debug,dnspect_core=debug,dnspect_client=debug,dnspect_checker=debug,dnspect_cli=debug"
    } else {
        "warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_trimmed_and_kept_in_order() {
        let raw = vec![
            " https://one.example/ip?q= ".to_string(),
            "https://two.example/ip?q=".to_string(),
        ];
        let endpoints = validate_endpoints(&raw).unwrap();
        assert_eq!(endpoints[0], "https://one.example/ip?q=");
        assert_eq!(endpoints[1], "https://two.example/ip?q=");
    }

    #[test]
    fn non_http_endpoints_are_rejected() {
        let raw = vec!["ftp://files.example/".to_string()];
        assert!(validate_endpoints(&raw).is_err());

        let raw = vec!["not a url".to_string()];
        assert!(validate_endpoints(&raw).is_err());
    }

    #[test]
    fn an_all_blank_list_is_rejected() {
        let raw = vec!["  ".to_string()];
        assert!(validate_endpoints(&raw).is_err());
    }
}
