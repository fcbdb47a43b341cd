//! Builder input validation errors.

use thiserror::Error;

/// Errors raised synchronously while configuring a request.
///
/// These indicate malformed input from the caller and are never converted
/// into failure responses.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A header was given an empty value.
    #[error("Header value for '{name}' cannot be empty")]
    EmptyHeaderValue {
        /// The header name.
        name: String,
    },

    /// The header name is not a valid HTTP token.
    #[error("Invalid header name '{name}': {message}")]
    InvalidHeaderName {
        /// The rejected header name.
        name: String,
        /// Parser diagnostic.
        message: String,
    },

    /// The header value contains characters HTTP does not allow.
    #[error("Invalid value for header '{name}': {message}")]
    InvalidHeaderValue {
        /// The header whose value was rejected.
        name: String,
        /// Parser diagnostic.
        message: String,
    },

    /// An authorization credential was empty.
    #[error("Authorization credential cannot be empty")]
    EmptyCredential,
}

impl ValidationError {
    /// Returns `true` if this error concerns a header.
    pub fn is_header_error(&self) -> bool {
        !matches!(self, Self::EmptyCredential)
    }
}
