use thiserror::Error;

/// Result type alias for check operations
pub type Result<T> = std::result::Result<T, CheckError>;

/// Errors that can occur while checking a domain
#[derive(Error, Debug)]
pub enum CheckError {
    /// Name resolution failed or did not complete within the timeout
    #[error("DNS resolution failed for {domain}: {reason}")]
    Resolution {
        /// Domain that could not be resolved
        domain: String,
        /// Underlying resolver error or timeout description
        reason: String,
    },

    /// Name resolution succeeded but returned no IPv4 addresses
    #[error("no IPv4 addresses found for {domain}")]
    NoIpv4 {
        /// Domain that resolved without any IPv4 answer
        domain: String,
    },

    /// Network-level failure during an ownership request
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Ownership request timed out
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// Ownership endpoint returned a non-2xx status
    #[error("endpoint returned status {code}: {message}")]
    Status {
        /// HTTP status code
        code: u16,
        /// Response body, as far as it could be read
        message: String,
    },

    /// Response body could not be decoded as a JSON object
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Decoded response carried no usable operator label field
    #[error("no operator label field in response: {document}")]
    MissingLabel {
        /// The decoded document, rendered for diagnosis
        document: String,
    },

    /// Every configured endpoint failed after its retry budget
    #[error("all endpoints exhausted")]
    Exhausted {
        /// Most recent underlying failure
        #[source]
        last: Box<CheckError>,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl CheckError {
    /// Returns true if the error is worth retrying against the same endpoint.
    ///
    /// Transport failures and timeouts are transient. Server-side (5xx)
    /// statuses are retried; client-side (4xx) statuses are not, since the
    /// request will not get better on its own.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Timeout(_) => true,
            Self::Status { code, .. } => *code >= 500,
            _ => false,
        }
    }

    /// Returns the HTTP status code if the endpoint answered at all
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_and_timeout_are_retryable() {
        assert!(CheckError::Transport("connection reset".into()).is_retryable());
        assert!(CheckError::Timeout(10).is_retryable());
    }

    #[test]
    fn server_errors_are_retryable_client_errors_are_not() {
        let server = CheckError::Status {
            code: 503,
            message: String::new(),
        };
        let client = CheckError::Status {
            code: 404,
            message: String::new(),
        };
        assert!(server.is_retryable());
        assert!(!client.is_retryable());
    }

    #[test]
    fn protocol_failures_are_not_retryable() {
        let missing = CheckError::MissingLabel {
            document: "{}".into(),
        };
        assert!(!missing.is_retryable());

        let exhausted = CheckError::Exhausted {
            last: Box::new(CheckError::Timeout(5)),
        };
        assert!(!exhausted.is_retryable());
    }

    #[test]
    fn status_code_accessor() {
        let err = CheckError::Status {
            code: 429,
            message: "slow down".into(),
        };
        assert_eq!(err.status_code(), Some(429));
        assert_eq!(CheckError::Timeout(1).status_code(), None);
    }
}
