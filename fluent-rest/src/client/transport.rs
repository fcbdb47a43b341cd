//! Shared HTTP transport.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::auth::{Authorization, AuthorizationScheme};
use crate::error::{ClientError, ConfigError, RestError};
use crate::request::{parse_header, RequestDescriptor};
use crate::response::TransportResponse;

/// Idle connections kept per host by the underlying pool.
const POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Builder for configuring an [`HttpTransport`].
#[derive(Debug, Default)]
pub struct HttpTransportBuilder {
    base_url: Option<Url>,
    timeout: Option<Duration>,
    default_headers: HeaderMap,
    authorization: Option<Authorization>,
}

impl HttpTransportBuilder {
    /// Sets the base address endpoints are resolved against.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if `url` does not parse.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self, RestError> {
        let parsed = Url::parse(url.as_ref()).map_err(ConfigError::InvalidUrl)?;
        self.base_url = Some(parsed);
        Ok(self)
    }

    /// Sets the timeout applied to requests that do not set their own.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a default header to all requests.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid or empty.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, RestError> {
        let (name, value) = parse_header(name.as_ref(), value.as_ref())?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the client authorization up front.
    pub fn authorization(
        mut self,
        scheme: AuthorizationScheme,
        credential: impl Into<String>,
    ) -> Result<Self, RestError> {
        self.authorization = Some(Authorization::new(scheme, credential)?);
        Ok(self)
    }

    /// Builds the [`HttpTransport`].
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::ClientBuild`] if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<HttpTransport, ConfigError> {
        let client = reqwest::Client::builder()
            .default_headers(self.default_headers.clone())
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .build()
            .map_err(ConfigError::ClientBuild)?;

        let authorization = OnceLock::new();
        if let Some(auth) = self.authorization {
            let _ = authorization.set(auth);
        }

        Ok(HttpTransport {
            inner: Arc::new(TransportInner {
                client,
                base_url: self.base_url,
                timeout: self.timeout,
                default_headers: self.default_headers,
                authorization,
            }),
        })
    }
}

#[derive(Debug)]
struct TransportInner {
    client: reqwest::Client,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    default_headers: HeaderMap,
    authorization: OnceLock<Authorization>,
}

/// The logical client shared by request builders.
///
/// Cloning is cheap and every clone refers to the same connection pool and
/// defaults. Defaults are fixed when the transport is built, except for the
/// authorization, which may be installed once later through
/// [`RequestBuilder::with_authorization`](crate::RequestBuilder::with_authorization).
///
/// ## Examples
///
/// ```rust
/// use std::time::Duration;
/// use fluent_rest::HttpTransport;
///
/// let transport = HttpTransport::builder()
///     .base_url("https://api.example.com")?
///     .timeout(Duration::from_secs(10))
///     .default_header("User-Agent", "fluent-rest")?
///     .build()?;
///
/// assert_eq!(transport.base_url().unwrap().as_str(), "https://api.example.com/");
/// # Ok::<(), fluent_rest::RestError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: Arc<TransportInner>,
}

impl HttpTransport {
    /// Creates a new builder for configuring a transport.
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::default()
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.inner.base_url.as_ref()
    }

    pub fn default_timeout(&self) -> Option<Duration> {
        self.inner.timeout
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.inner.default_headers
    }

    /// The installed authorization, if any.
    pub fn authorization(&self) -> Option<&Authorization> {
        self.inner.authorization.get()
    }

    /// Returns `true` if requests already carry an `Authorization` header,
    /// either installed or given as a raw default header.
    pub fn has_authorization(&self) -> bool {
        self.authorization().is_some() || self.inner.default_headers.contains_key(AUTHORIZATION)
    }

    /// Installs the authorization exactly once.
    pub(crate) fn install_authorization(&self, authorization: Authorization) -> Result<(), ConfigError> {
        let attempted = authorization.scheme();
        if self.inner.default_headers.contains_key(AUTHORIZATION) {
            return Err(ConfigError::AuthorizationAlreadySet { attempted });
        }
        self.inner
            .authorization
            .set(authorization)
            .map_err(|_| ConfigError::AuthorizationAlreadySet { attempted })
    }

    /// Resolves a request target against the base address.
    pub fn resolve(&self, target: &str) -> Result<Url, ClientError> {
        match &self.inner.base_url {
            Some(base) => Ok(base.join(target)?),
            None => Ok(Url::parse(target)?),
        }
    }

    /// Sends `request` and reads the full response body.
    ///
    /// The installed authorization is read at send time and replaces any
    /// `Authorization` header on the request. A body's content type is sent
    /// unless the request already carries a `Content-Type` header. Each of the
    /// two headers is sent exactly once.
    ///
    /// A cancelled `cancel` token aborts the exchange with
    /// [`ClientError::Cancelled`].
    ///
    /// ## Errors
    ///
    /// Returns a [`ClientError`] if the URL cannot be resolved, the request
    /// fails or times out, or the caller cancels it.
    pub async fn send(
        &self,
        request: &RequestDescriptor,
        cancel: Option<&CancellationToken>,
    ) -> Result<TransportResponse, ClientError> {
        let url = self.resolve(request.target())?;

        let mut headers = request.headers().clone();
        if let Some(auth) = self.authorization() {
            headers.insert(AUTHORIZATION, auth.header_value());
        }
        if let Some(body) = request.body() {
            headers
                .entry(CONTENT_TYPE)
                .or_insert_with(|| HeaderValue::from_static(body.content_type()));
        }

        let mut builder = self
            .inner
            .client
            .request(request.method().to_reqwest(), url)
            .headers(headers);
        if let Some(body) = request.body() {
            builder = builder.body(body.bytes().clone());
        }
        if let Some(timeout) = request.timeout() {
            builder = builder.timeout(timeout);
        }

        let timeout = request.timeout();
        let exchange = async move {
            let response = builder
                .send()
                .await
                .map_err(|e| classify(e, timeout))?;
            let status = response.status();
            let content = response.text().await.map_err(|e| classify(e, timeout))?;
            Ok::<_, ClientError>(TransportResponse::new(status, content))
        };

        match cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => Err(ClientError::Cancelled),
                result = exchange => result,
            },
            None => exchange.await,
        }
    }
}

fn classify(error: reqwest::Error, timeout: Option<Duration>) -> ClientError {
    match timeout {
        Some(duration) if error.is_timeout() => ClientError::Timeout {
            duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
        },
        _ => ClientError::Request(error),
    }
}
