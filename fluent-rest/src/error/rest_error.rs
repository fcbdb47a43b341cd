//! Top-level error type.

use super::{ClientError, CodecError, ConfigError, RequestError, ValidationError};
use thiserror::Error;

/// Top-level error type for all builder, executor and factory operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use fluent_rest::RestError;
///
/// fn handle_error(err: RestError) {
///     match err {
///         RestError::Validation(e) => eprintln!("Bad input: {e}"),
///         RestError::Config(e) => eprintln!("Configuration error: {e}"),
///         RestError::Codec(e) => eprintln!("Body error: {e}"),
///         RestError::Request(e) => eprintln!("Cannot send: {e}"),
///         RestError::Client(e) => eprintln!("Network error: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// Malformed builder input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Conflicting or missing configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Body encoding or decoding failed.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The request cannot be sent as configured.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// HTTP client errors (network, timeout, cancellation).
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl RestError {
    /// Returns `true` for errors caused by misuse of the API rather than
    /// by the network or the remote server.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Config(_) | Self::Request(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_request_error() {
        let err: RestError = RequestError::MissingBaseUrl.into();
        assert!(matches!(err, RestError::Request(_)));
        assert!(err.is_usage_error());
    }

    #[test]
    fn test_client_error_is_not_usage_error() {
        let err: RestError = ClientError::Cancelled.into();
        assert!(!err.is_usage_error());
    }

    #[test]
    fn test_error_display_is_transparent() {
        let err: RestError = ValidationError::EmptyCredential.into();
        assert_eq!(err.to_string(), ValidationError::EmptyCredential.to_string());
    }
}
