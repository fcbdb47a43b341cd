//! Client factory handing configured transports to request builders.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::{FactoryConfig, HttpTransport};
use crate::body::SerializerOptions;
use crate::error::{ConfigError, RestError};
use crate::request::RequestBuilder;

/// Supplies request builders over pre-configured transports.
///
/// A factory holds an optional default transport, any number of named
/// profiles, and the serializer options every builder it creates shares.
/// Each builder receives a clone of the transport, so all builders for the
/// same profile share one connection pool and one authorization slot.
///
/// ## Examples
///
/// ```rust
/// use fluent_rest::{ClientFactory, HttpTransport, RestMethod};
///
/// let factory = ClientFactory::new()
///     .with_default_transport(
///         HttpTransport::builder()
///             .base_url("https://api.example.com")?
///             .build()?,
///     )
///     .with_profile(
///         "search",
///         HttpTransport::builder()
///             .base_url("https://search.example.com")?
///             .build()?,
///     );
///
/// let executor = factory
///     .create_named_client("search")?
///     .with_method(RestMethod::Get)
///     .with_endpoint("/q")
///     .build_request()?;
/// assert_eq!(executor.request().target(), "/q");
/// # Ok::<(), fluent_rest::RestError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientFactory {
    default_transport: Option<HttpTransport>,
    profiles: HashMap<String, HttpTransport>,
    options: Arc<SerializerOptions>,
}

impl ClientFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the transport used by [`create_client`](Self::create_client).
    pub fn with_default_transport(mut self, transport: HttpTransport) -> Self {
        self.default_transport = Some(transport);
        self
    }

    /// Registers a named transport profile, replacing any profile of the same name.
    pub fn with_profile(mut self, name: impl Into<String>, transport: HttpTransport) -> Self {
        self.profiles.insert(name.into(), transport);
        self
    }

    pub fn with_serializer_options(mut self, options: SerializerOptions) -> Self {
        self.options = Arc::new(options);
        self
    }

    pub fn serializer_options(&self) -> &SerializerOptions {
        &self.options
    }

    /// Builds a factory from a parsed configuration.
    ///
    /// Every profile gets its own transport. When `default_profile` is set,
    /// that profile's transport also becomes the default.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::UnknownProfile`] if `default_profile` names a
    /// profile that is not defined, or any error from building a transport.
    pub fn from_config(config: FactoryConfig) -> Result<Self, RestError> {
        let mut factory = Self::new().with_serializer_options(config.serializer);

        for (name, profile) in &config.profiles {
            let transport = profile.build()?;
            debug!(profile = %name, "Configured client profile");
            factory = factory.with_profile(name.clone(), transport);
        }

        if let Some(name) = config.default_profile {
            let transport = factory
                .profiles
                .get(&name)
                .cloned()
                .ok_or_else(|| ConfigError::unknown_profile(&name))?;
            factory.default_transport = Some(transport);
        }

        Ok(factory)
    }

    /// Creates a builder over the default transport.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingDefaultTransport`] if none was configured.
    pub fn create_client(&self) -> Result<RequestBuilder, ConfigError> {
        let transport = self
            .default_transport
            .clone()
            .ok_or(ConfigError::MissingDefaultTransport)?;
        Ok(RequestBuilder::with_options(transport, Arc::clone(&self.options)))
    }

    /// Creates a builder over the named profile.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::UnknownProfile`] if no profile has that name.
    pub fn create_named_client(&self, name: &str) -> Result<RequestBuilder, ConfigError> {
        let transport = self
            .profiles
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::unknown_profile(name))?;
        Ok(RequestBuilder::with_options(transport, Arc::clone(&self.options)))
    }
}
