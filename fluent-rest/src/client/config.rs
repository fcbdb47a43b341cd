//! Serializable client configuration.
//!
//! A [`FactoryConfig`] describes named transport profiles and the serializer
//! options shared by every client a factory hands out. It is usually loaded
//! from YAML:
//!
//! ```yaml
//! default_profile: billing
//! serializer:
//!   case_insensitive: true
//!   naming_policy: camel_case
//! profiles:
//!   billing:
//!     base_url: https://billing.example.com/api/
//!     timeout_ms: 5000
//!     headers:
//!       X-Tenant: acme
//!     authorization:
//!       scheme: Bearer
//!       credential: s3cret
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{HttpTransport, HttpTransportBuilder};
use crate::auth::AuthorizationScheme;
use crate::body::SerializerOptions;
use crate::error::{ConfigError, RestError};

/// Authorization installed on a transport when it is built.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationConfig {
    pub scheme: AuthorizationScheme,
    pub credential: String,
}

impl std::fmt::Debug for AuthorizationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizationConfig")
            .field("scheme", &self.scheme)
            .field("credential", &"<redacted>")
            .finish()
    }
}

/// Settings for one transport profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    pub base_url: Option<String>,
    pub timeout_ms: Option<u64>,
    pub headers: BTreeMap<String, String>,
    pub authorization: Option<AuthorizationConfig>,
}

impl TransportConfig {
    /// Builds the transport this profile describes.
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL does not parse, a header is invalid,
    /// the credential is empty or the HTTP client cannot be constructed.
    pub fn build(&self) -> Result<HttpTransport, RestError> {
        let mut builder = HttpTransportBuilder::default();
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url)?;
        }
        if let Some(ms) = self.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        for (name, value) in &self.headers {
            builder = builder.default_header(name, value)?;
        }
        if let Some(auth) = &self.authorization {
            builder = builder.authorization(auth.scheme, auth.credential.clone())?;
        }
        Ok(builder.build()?)
    }
}

/// Named profiles plus the serializer options shared across them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Profile used by [`ClientFactory::create_client`](super::ClientFactory::create_client).
    pub default_profile: Option<String>,
    pub profiles: BTreeMap<String, TransportConfig>,
    pub serializer: SerializerOptions,
}

impl FactoryConfig {
    /// Parses a configuration from YAML.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the document is malformed.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses a configuration from JSON.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is malformed.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{DecodeFailure, NamingPolicy};

    const YAML: &str = r#"
default_profile: billing
serializer:
  case_insensitive: true
  naming_policy: camel_case
  decode_failure: discard
profiles:
  billing:
    base_url: https://billing.example.com/api/
    timeout_ms: 5000
    headers:
      X-Tenant: acme
    authorization:
      scheme: Bearer
      credential: s3cret
  public:
    base_url: https://public.example.com
"#;

    #[test]
    fn test_from_yaml() {
        let config = FactoryConfig::from_yaml(YAML).unwrap();

        assert_eq!(config.default_profile.as_deref(), Some("billing"));
        assert!(config.serializer.case_insensitive);
        assert_eq!(config.serializer.naming_policy, NamingPolicy::CamelCase);
        assert_eq!(config.serializer.decode_failure, DecodeFailure::Discard);
        assert!(!config.serializer.pretty);

        let billing = &config.profiles["billing"];
        assert_eq!(billing.timeout_ms, Some(5000));
        assert_eq!(billing.headers.get("X-Tenant").map(String::as_str), Some("acme"));
        assert_eq!(
            billing.authorization.as_ref().map(|a| a.scheme),
            Some(AuthorizationScheme::Bearer)
        );
        assert!(config.profiles["public"].headers.is_empty());
    }

    #[test]
    fn test_from_json() {
        let config = FactoryConfig::from_json(
            r#"{"profiles":{"local":{"base_url":"http://localhost:3000","timeout_ms":250}}}"#,
        )
        .unwrap();

        assert!(config.default_profile.is_none());
        assert_eq!(config.serializer, SerializerOptions::default());
        assert_eq!(config.profiles["local"].timeout_ms, Some(250));
    }

    #[test]
    fn test_malformed_yaml() {
        let result = FactoryConfig::from_yaml("profiles: [unterminated");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_build_transport() {
        let config = FactoryConfig::from_yaml(YAML).unwrap();
        let transport = config.profiles["billing"].build().unwrap();

        assert_eq!(
            transport.base_url().map(|u| u.as_str()),
            Some("https://billing.example.com/api/")
        );
        assert_eq!(transport.default_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(
            transport
                .default_headers()
                .get("x-tenant")
                .and_then(|v| v.to_str().ok()),
            Some("acme")
        );
        assert!(transport.has_authorization());
    }

    #[test]
    fn test_build_rejects_invalid_url() {
        let config = TransportConfig {
            base_url: Some("::not a url::".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.build(),
            Err(RestError::Config(ConfigError::InvalidUrl(_)))
        ));
    }

    #[test]
    fn test_authorization_config_debug_redacts() {
        let auth = AuthorizationConfig {
            scheme: AuthorizationScheme::Basic,
            credential: "hunter2".to_string(),
        };
        assert!(!format!("{auth:?}").contains("hunter2"));
    }
}
