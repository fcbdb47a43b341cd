//! HTTP client and network errors.

use thiserror::Error;

/// Errors from the HTTP transport layer.
///
/// These errors represent network-level failures that occur while a request
/// is in flight. The executor converts them into failure responses.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Request exceeded the configured timeout.
    #[error("Request timeout after {duration_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        duration_ms: u64,
    },

    /// The caller cancelled the request before it completed.
    #[error("Request was cancelled")]
    Cancelled,

    /// The endpoint could not be resolved against the base URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ClientError {
    /// Returns `true` if the request never reached a response.
    pub fn is_transport_failure(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Cancelled => true,
            Self::Request(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            Self::InvalidUrl(_) => false,
        }
    }
}
