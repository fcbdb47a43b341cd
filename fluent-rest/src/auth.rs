//! Authorization schemes for outgoing requests.
//!
//! A scheme is a label only: the crate formats an `Authorization` header of
//! the form `<scheme> <credential>` and performs no signing. Callers using
//! Digest, Hawk or AWS SigV4 must supply an already-computed credential.

use std::fmt;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::ValidationError;

/// The scheme label placed in front of an authorization credential.
///
/// ## Examples
///
/// ```rust
/// use fluent_rest::AuthorizationScheme;
///
/// assert_eq!(AuthorizationScheme::Aws4HmacSha256.to_string(), "AWS4-HMAC-SHA256");
/// let parsed: AuthorizationScheme = "Bearer".parse().unwrap();
/// assert_eq!(parsed, AuthorizationScheme::Bearer);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum AuthorizationScheme {
    /// No scheme label; the credential is sent as-is.
    #[default]
    None,
    /// HTTP Basic (`base64(user:password)` supplied by the caller).
    Basic,
    /// Bearer token.
    Bearer,
    /// HTTP Digest.
    Digest,
    /// Hawk.
    Hawk,
    /// AWS Signature Version 4 sent in the header.
    #[strum(serialize = "AWS4-HMAC-SHA256")]
    #[serde(rename = "AWS4-HMAC-SHA256")]
    Aws4HmacSha256,
    /// AWS Signature Version 4 sent as query parameters.
    #[strum(serialize = "AWS4-HMAC-SHA256-Query")]
    #[serde(rename = "AWS4-HMAC-SHA256-Query")]
    Aws4HmacSha256Query,
}

/// A scheme paired with its credential.
#[derive(Clone, PartialEq, Eq)]
pub struct Authorization {
    scheme: AuthorizationScheme,
    credential: String,
    header: HeaderValue,
}

impl Authorization {
    /// Creates an authorization.
    ///
    /// ## Errors
    ///
    /// Returns [`ValidationError::EmptyCredential`] for an empty credential and
    /// [`ValidationError::InvalidHeaderValue`] if the formatted header contains
    /// characters HTTP does not allow.
    pub fn new(
        scheme: AuthorizationScheme,
        credential: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let credential = credential.into();
        if credential.is_empty() {
            return Err(ValidationError::EmptyCredential);
        }
        let mut header = HeaderValue::try_from(format_header(scheme, &credential)).map_err(|e| {
            ValidationError::InvalidHeaderValue {
                name: AUTHORIZATION.to_string(),
                message: e.to_string(),
            }
        })?;
        header.set_sensitive(true);
        Ok(Self {
            scheme,
            credential,
            header,
        })
    }

    pub fn scheme(&self) -> AuthorizationScheme {
        self.scheme
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }

    /// Formats the `Authorization` header value.
    pub fn header_string(&self) -> String {
        format_header(self.scheme, &self.credential)
    }

    /// The header value, marked sensitive so `reqwest` keeps it out of debug output.
    pub fn header_value(&self) -> HeaderValue {
        self.header.clone()
    }
}

fn format_header(scheme: AuthorizationScheme, credential: &str) -> String {
    match scheme {
        AuthorizationScheme::None => credential.to_string(),
        scheme => format!("{scheme} {credential}"),
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authorization")
            .field("scheme", &self.scheme)
            .field("credential", &"<redacted>")
            .finish()
    }
}
