//! Serializer configuration shared by a client factory and its builders.

use serde::{Deserialize, Serialize};

use super::NamingPolicy;

/// What a typed send does when a successful response cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeFailure {
    /// Return a failure response carrying the decode error message.
    #[default]
    Report,
    /// Return the successful response without data.
    Discard,
    /// Return the decode error to the caller.
    Propagate,
}

/// Options controlling body encoding and decoding.
///
/// ## Examples
///
/// ```rust
/// use fluent_rest::body::{NamingPolicy, SerializerOptions};
///
/// let options = SerializerOptions::default()
///     .case_insensitive(true)
///     .naming_policy(NamingPolicy::CamelCase);
/// assert!(options.is_case_insensitive());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializerOptions {
    /// Match incoming JSON keys regardless of case or word style.
    pub case_insensitive: bool,
    /// Key style used when writing JSON.
    pub naming_policy: NamingPolicy,
    /// Pretty-print JSON bodies.
    pub pretty: bool,
    /// Behaviour when a successful response fails to decode.
    pub decode_failure: DecodeFailure,
}

impl SerializerOptions {
    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    pub fn naming_policy(mut self, policy: NamingPolicy) -> Self {
        self.naming_policy = policy;
        self
    }

    pub fn pretty(mut self, enabled: bool) -> Self {
        self.pretty = enabled;
        self
    }

    pub fn decode_failure(mut self, mode: DecodeFailure) -> Self {
        self.decode_failure = mode;
        self
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Returns `true` if incoming keys must be normalized before decoding.
    pub(crate) fn normalizes_keys(&self) -> bool {
        self.case_insensitive || self.naming_policy != NamingPolicy::AsIs
    }
}
