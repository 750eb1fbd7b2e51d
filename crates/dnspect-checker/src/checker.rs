//! One task per domain, bounded by a counting semaphore, fanned back in
//! over a channel.

use dnspect_client::{DomainResolver, LabelSource};
use dnspect_core::{
    aggregate, CheckError, DomainResult, DomainSpec, IpCheckResult, MatchMode, Verdict,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Semaphore};
use tracing::warn;

/// Orchestration settings
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// How many domain tasks may run simultaneously (minimum 1)
    pub concurrency: usize,

    /// Aggregation policy over each domain's addresses
    pub mode: MatchMode,

    /// Timeout for one name resolution
    pub resolve_timeout: Duration,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            concurrency: 2,
            mode: MatchMode::Lenient,
            resolve_timeout: Duration::from_secs(10),
        }
    }
}

/// Runs the checking pipeline over a list of domains.
///
/// Generic over the [`LabelSource`] so the pipeline can be exercised with
/// scripted lookups in tests.
pub struct Checker<S> {
    source: Arc<S>,
    resolver: DomainResolver,
    config: CheckerConfig,
}

impl<S: LabelSource + 'static> Checker<S> {
    /// Create a checker over the given lookup source
    #[must_use]
    pub fn new(source: S, config: CheckerConfig) -> Self {
        let resolver = DomainResolver::new(config.resolve_timeout);
        Self {
            source: Arc::new(source),
            resolver,
            config,
        }
    }

    /// Check every domain and collect one result per input spec.
    ///
    /// Spawns one task per domain; a semaphore keeps at most
    /// `concurrency` of them actively working. Results arrive in
    /// completion order, not input order. A domain's failures are data in
    /// its own result and never disturb the other tasks.
    pub async fn run(&self, specs: Vec<DomainSpec>) -> Vec<DomainResult> {
        let total = specs.len();
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency.max(1)));
        let (tx, mut rx) = mpsc::channel(total.max(1));

        for spec in specs {
            let semaphore = Arc::clone(&semaphore);
            let tx = tx.clone();
            let source = Arc::clone(&self.source);
            let resolver = self.resolver.clone();
            let mode = self.config.mode;

            tokio::spawn(async move {
                let Ok(_permit) = semaphore.acquire().await else {
                    return;
                };
                let result = check_domain(&resolver, source.as_ref(), spec, mode).await;
                let _ = tx.send(result).await;
            });
        }
        drop(tx);

        let mut results = Vec::with_capacity(total);
        while let Some(result) = rx.recv().await {
            results.push(result);
        }
        results
    }
}

/// Resolve one domain and look up every address, sequentially.
///
/// Sequential per-address lookups keep backoff timing and rate-gate
/// interaction simple to reason about within a domain; the gate still
/// bounds the aggregate rate across domains.
async fn check_domain<S: LabelSource>(
    resolver: &DomainResolver,
    source: &S,
    spec: DomainSpec,
    mode: MatchMode,
) -> DomainResult {
    let ips = match resolver.resolve_ipv4(&spec.name).await {
        Ok(ips) => ips,
        Err(err) => {
            warn!(domain = %spec.name, error = %err, "resolution failed, marking polluted");
            let verdict = match err {
                CheckError::NoIpv4 { .. } => Verdict::NoAddresses,
                _ => Verdict::ResolutionFailed,
            };
            return DomainResult::unresolved(spec, verdict);
        }
    };

    let mut ip_results = Vec::with_capacity(ips.len());
    for ip in ips {
        let outcome = source.lookup(ip).await;
        ip_results.push(IpCheckResult { ip, outcome });
    }

    aggregate(spec, ip_results, mode)
}
