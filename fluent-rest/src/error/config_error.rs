//! Client and factory configuration errors.

use thiserror::Error;

use crate::auth::AuthorizationScheme;

/// Errors in client or factory configuration.
///
/// These errors occur during setup and indicate conflicting or missing
/// configuration rather than network problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The shared transport already carries an authorization.
    ///
    /// Authorization is a per-client default; it is set once and never
    /// overwritten by a later builder.
    #[error("Authorization is already set on this client (attempted {attempted})")]
    AuthorizationAlreadySet {
        /// The scheme of the rejected authorization.
        attempted: AuthorizationScheme,
    },

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// No transport is registered under the requested profile name.
    #[error("Unknown client profile: {name}")]
    UnknownProfile {
        /// The requested profile name.
        name: String,
    },

    /// The factory has no default transport.
    #[error("No default client is configured")]
    MissingDefaultTransport,

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// A YAML configuration document could not be parsed.
    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON configuration document could not be parsed.
    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates an unknown profile error.
    pub fn unknown_profile(name: impl Into<String>) -> Self {
        Self::UnknownProfile { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_already_set() {
        let err = ConfigError::AuthorizationAlreadySet {
            attempted: AuthorizationScheme::Bearer,
        };
        assert_eq!(
            err.to_string(),
            "Authorization is already set on this client (attempted Bearer)"
        );
    }

    #[test]
    fn test_invalid_url() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err = ConfigError::InvalidUrl(url_err);
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_unknown_profile() {
        let err = ConfigError::unknown_profile("billing");
        assert_eq!(err.to_string(), "Unknown client profile: billing");
    }
}
