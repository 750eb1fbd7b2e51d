//! IP ownership lookup with endpoint fallback, retry and rate limiting.

use crate::config::RetryConfig;
use crate::limiter::RequestGate;
use crate::probe::extract_label;
use dnspect_core::{CheckError, Result};
use reqwest::Client as HttpClient;
use serde_json::{Map, Value};
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client resolving an IP address to its network-operator label.
///
/// Endpoints are tried in priority order; each gets up to
/// `max_retries + 1` attempts with exponential backoff on transient
/// failures. Every attempt first takes a token from the shared
/// [`RequestGate`], so the aggregate request rate across all concurrent
/// callers stays within the configured bound. Cloning is cheap and all
/// clones share one gate.
#[derive(Clone)]
pub struct OwnershipClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    endpoints: Vec<String>,
    timeout: Duration,
    retry: RetryConfig,
    gate: Option<RequestGate>,
}

impl OwnershipClient {
    /// Create a client for the given endpoints using default settings
    #[must_use]
    pub fn new(endpoints: Vec<String>) -> Self {
        OwnershipClientBuilder::new(endpoints).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(endpoints: Vec<String>) -> OwnershipClientBuilder {
        OwnershipClientBuilder::new(endpoints)
    }

    /// Resolve one IP address to its operator label.
    ///
    /// Returns [`CheckError::Exhausted`] wrapping the most recent failure
    /// once every endpoint has used up its attempts. Responses are never
    /// cached; repeated IPs each trigger an independent request.
    pub async fn lookup(&self, ip: Ipv4Addr) -> Result<String> {
        let mut last_err = CheckError::Config("no endpoints configured".to_string());

        for endpoint in &self.inner.endpoints {
            let mut attempt = 0;
            loop {
                if let Some(gate) = &self.inner.gate {
                    gate.acquire().await;
                }

                match self.query_endpoint(endpoint, ip).await {
                    Ok(label) => {
                        debug!(ip = %ip, endpoint = %endpoint, label = %label, "ownership lookup succeeded");
                        return Ok(label);
                    }
                    Err(err) => {
                        let retry_same = err.is_retryable() && attempt < self.inner.retry.max_retries;
                        warn!(
                            ip = %ip,
                            endpoint = %endpoint,
                            attempt,
                            error = %err,
                            retrying = retry_same,
                            "ownership lookup attempt failed"
                        );
                        last_err = err;

                        if !retry_same {
                            break;
                        }
                        tokio::time::sleep(self.inner.retry.backoff_for(attempt)).await;
                        attempt += 1;
                    }
                }
            }
        }

        Err(CheckError::Exhausted {
            last: Box::new(last_err),
        })
    }

    /// One attempt against one endpoint. The IP's literal text form is
    /// appended to the endpoint prefix to form the request target.
    async fn query_endpoint(&self, endpoint: &str, ip: Ipv4Addr) -> Result<String> {
        let url = format!("{endpoint}{ip}");
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CheckError::Status {
                code: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.classify_transport(&e))?;
        let doc: Map<String, Value> = serde_json::from_str(&body)?;
        extract_label(&doc)
    }

    fn classify_transport(&self, error: &reqwest::Error) -> CheckError {
        if error.is_timeout() {
            CheckError::Timeout(self.inner.timeout.as_secs())
        } else {
            CheckError::Transport(error.to_string())
        }
    }
}

/// Builder for configuring an [`OwnershipClient`]
pub struct OwnershipClientBuilder {
    endpoints: Vec<String>,
    timeout: Duration,
    user_agent: String,
    retry: RetryConfig,
    rps: u32,
}

impl OwnershipClientBuilder {
    /// Create a new builder with the given endpoint priority list
    #[must_use]
    pub fn new(endpoints: Vec<String>) -> Self {
        Self {
            endpoints,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("dnspect/{}", env!("CARGO_PKG_VERSION")),
            retry: RetryConfig::default(),
            rps: 0,
        }
    }

    /// Set the per-request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set retry configuration
    #[must_use]
    pub const fn retry(mut self, config: RetryConfig) -> Self {
        self.retry = config;
        self
    }

    /// Cap the aggregate request rate; 0 disables rate limiting
    #[must_use]
    pub const fn requests_per_second(mut self, rps: u32) -> Self {
        self.rps = rps;
        self
    }

    /// Build the client
    #[must_use]
    pub fn build(self) -> OwnershipClient {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        OwnershipClient {
            inner: Arc::new(ClientInner {
                http,
                endpoints: self.endpoints,
                timeout: self.timeout,
                retry: self.retry,
                gate: RequestGate::per_second(self.rps),
            }),
        }
    }
}
