//! Chainable request builder.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::Serialize;
use tracing::debug;

use super::RequestDescriptor;
use crate::auth::{Authorization, AuthorizationScheme};
use crate::body::{encode, BodyKind, EncodedBody, SerializerOptions};
use crate::client::{HttpTransport, RequestExecutor};
use crate::error::{ConfigError, RequestError, RestError, ValidationError};
use crate::method::RestMethod;

/// Accumulates the configuration of one request.
///
/// Every `with_*` call consumes the builder and hands it back, so calls chain.
/// Calls that can reject their input return `Result<Self, RestError>`.
///
/// The builder holds a clone of a shared [`HttpTransport`]; dropping the
/// builder never closes the transport while other clones are alive.
///
/// ## Examples
///
/// ```rust,ignore
/// use fluent_rest::{AuthorizationScheme, BodyKind, RequestBuilder, RestMethod};
///
/// let executor = RequestBuilder::new(transport)
///     .with_method(RestMethod::Post)
///     .with_endpoint("/orders")
///     .with_body_as(&order, BodyKind::Xml)?
///     .with_authorization(AuthorizationScheme::Bearer, token)?
///     .build_request()?;
/// ```
#[derive(Debug)]
pub struct RequestBuilder {
    transport: HttpTransport,
    options: Arc<SerializerOptions>,
    endpoint: String,
    method: Option<RestMethod>,
    parameters: BTreeMap<String, String>,
    headers: HeaderMap,
    body: Option<EncodedBody>,
    response_kind: Option<BodyKind>,
    timeout: Option<Duration>,
}

impl RequestBuilder {
    /// Creates a builder over `transport` with default serializer options.
    pub fn new(transport: HttpTransport) -> Self {
        Self::with_options(transport, Arc::new(SerializerOptions::default()))
    }

    /// Creates a builder sharing a factory's serializer options.
    pub fn with_options(transport: HttpTransport, options: Arc<SerializerOptions>) -> Self {
        Self {
            transport,
            options,
            endpoint: String::new(),
            method: None,
            parameters: BTreeMap::new(),
            headers: HeaderMap::new(),
            body: None,
            response_kind: None,
            timeout: None,
        }
    }

    /// Adds a header. A later header with the same name replaces this one.
    ///
    /// ## Errors
    ///
    /// Returns a [`ValidationError`] if the value is empty or either part is
    /// not valid in an HTTP header, and
    /// [`ConfigError::AuthorizationAlreadySet`] for an `Authorization` header
    /// when the transport already has one.
    pub fn with_header(
        mut self,
        key: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, RestError> {
        let (name, value) = parse_header(key.as_ref(), value.as_ref())?;
        if name == AUTHORIZATION && self.transport.has_authorization() {
            return Err(ConfigError::AuthorizationAlreadySet {
                attempted: AuthorizationScheme::None,
            }
            .into());
        }
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Adds a query parameter. A later value for the same key replaces this one.
    pub fn with_query_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Merges several query parameters.
    pub fn with_query_parameters<I, K, V>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in parameters {
            self = self.with_query_parameter(key, value);
        }
        self
    }

    /// Encodes `value` as a JSON body.
    pub fn with_body<T>(self, value: &T) -> Result<Self, RestError>
    where
        T: Serialize + ?Sized,
    {
        self.with_body_as(value, BodyKind::Json)
    }

    /// Encodes `value` in the given format right away and stores the result.
    ///
    /// The same format is used to decode the response unless
    /// [`with_response_kind`](Self::with_response_kind) says otherwise.
    ///
    /// ## Errors
    ///
    /// Returns a [`CodecError`](crate::error::CodecError) if the value cannot
    /// be written in that format.
    pub fn with_body_as<T>(mut self, value: &T, kind: BodyKind) -> Result<Self, RestError>
    where
        T: Serialize + ?Sized,
    {
        let body = encode(value, kind, &self.options)?;
        debug!(body.kind = %kind, body.len = body.len(), "Encoded request body");
        self.body = Some(body);
        Ok(self)
    }

    pub fn with_endpoint(mut self, path: impl Into<String>) -> Self {
        self.endpoint = path.into();
        self
    }

    pub fn with_method(mut self, method: RestMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// Sets the timeout for this request only. `None` falls back to the
    /// client's default timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Decodes the response in `kind` and advertises it with an `Accept` header.
    pub fn with_response_kind(mut self, kind: BodyKind) -> Self {
        self.response_kind = Some(kind);
        self.headers
            .insert(ACCEPT, HeaderValue::from_static(kind.media_type()));
        self
    }

    /// Installs the authorization on the shared client.
    ///
    /// Authorization is a per-client default: every request sent through the
    /// same transport carries it afterwards.
    ///
    /// ## Errors
    ///
    /// Returns [`ValidationError::EmptyCredential`] for an empty credential and
    /// [`ConfigError::AuthorizationAlreadySet`](crate::error::ConfigError::AuthorizationAlreadySet)
    /// if the transport already has an authorization, whatever its scheme.
    pub fn with_authorization(
        self,
        scheme: AuthorizationScheme,
        credential: impl Into<String>,
    ) -> Result<Self, RestError> {
        let authorization = Authorization::new(scheme, credential)?;
        self.transport.install_authorization(authorization)?;
        debug!(auth.scheme = %scheme, "Installed client authorization");
        Ok(self)
    }

    /// Assembles the request and binds it to an executor.
    ///
    /// The body is dropped for GET and DELETE. The response format is the
    /// explicit response kind, else the body's kind, else JSON.
    ///
    /// ## Errors
    ///
    /// Returns [`RequestError::MissingMethod`] if no method was set.
    pub fn build_request(self) -> Result<RequestExecutor, RestError> {
        let method = self.method.ok_or(RequestError::MissingMethod)?;
        let response_kind = self
            .response_kind
            .or_else(|| self.body.as_ref().map(EncodedBody::kind))
            .unwrap_or_default();
        let timeout = self.timeout.or_else(|| self.transport.default_timeout());

        let request = RequestDescriptor::new(
            method,
            self.endpoint,
            self.parameters,
            self.headers,
            self.body,
            timeout,
            response_kind,
        );
        debug!(
            http.method = %request.method(),
            http.target = request.target(),
            has_body = request.body().is_some(),
            "Built request"
        );

        Ok(RequestExecutor::new(self.transport, request, self.options))
    }
}

/// Validates a header pair into its typed form.
pub(crate) fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyHeaderValue {
            name: name.to_string(),
        });
    }
    let header_name = HeaderName::try_from(name).map_err(|e| ValidationError::InvalidHeaderName {
        name: name.to_string(),
        message: e.to_string(),
    })?;
    let header_value = HeaderValue::try_from(value).map_err(|e| ValidationError::InvalidHeaderValue {
        name: name.to_string(),
        message: e.to_string(),
    })?;
    Ok((header_name, header_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[derive(serde::Serialize)]
    struct Payload {
        id: u32,
        name: String,
    }

    #[derive(serde::Serialize)]
    struct Deep {
        inner: Payload,
    }

    fn transport() -> HttpTransport {
        HttpTransport::builder()
            .base_url("http://localhost:8080")
            .unwrap()
            .build()
            .unwrap()
    }

    fn payload() -> Payload {
        Payload {
            id: 1,
            name: "x".to_string(),
        }
    }

    #[test]
    fn test_builds_target_with_encoded_query() {
        let executor = RequestBuilder::new(transport())
            .with_method(RestMethod::Get)
            .with_endpoint("/search")
            .with_query_parameter("q", "hello world")
            .with_query_parameters([("lang", "en"), ("q", "fluent & rest")])
            .build_request()
            .unwrap();

        assert_eq!(
            executor.request().target(),
            "/search?lang=en&q=fluent+%26+rest"
        );
    }

    #[test]
    fn test_header_last_write_wins() {
        let executor = RequestBuilder::new(transport())
            .with_method(RestMethod::Get)
            .with_header("X-Tenant", "a")
            .unwrap()
            .with_header("x-tenant", "b")
            .unwrap()
            .build_request()
            .unwrap();

        let values: Vec<_> = executor.request().headers().get_all("x-tenant").iter().collect();
        assert_eq!(values, vec!["b"]);
    }

    #[test]
    fn test_empty_header_value_rejected() {
        let result = RequestBuilder::new(transport()).with_header("X-Empty", "");
        assert!(matches!(
            result,
            Err(RestError::Validation(ValidationError::EmptyHeaderValue { .. }))
        ));
    }

    #[test]
    fn test_invalid_header_name_rejected() {
        let result = RequestBuilder::new(transport()).with_header("bad header", "v");
        assert!(matches!(
            result,
            Err(RestError::Validation(ValidationError::InvalidHeaderName { .. }))
        ));
    }

    #[test]
    fn test_body_not_attached_for_get_or_delete() {
        for method in [RestMethod::Get, RestMethod::Delete] {
            let executor = RequestBuilder::new(transport())
                .with_method(method)
                .with_body(&payload())
                .unwrap()
                .build_request()
                .unwrap();
            assert!(executor.request().body().is_none(), "{method}");
        }
    }

    #[test]
    fn test_body_attached_for_post() {
        let executor = RequestBuilder::new(transport())
            .with_method(RestMethod::Post)
            .with_endpoint("/items")
            .with_body(&payload())
            .unwrap()
            .build_request()
            .unwrap();

        let body = executor.request().body().unwrap();
        assert_eq!(body.as_str(), Some(r#"{"id":1,"name":"x"}"#));
        assert_eq!(executor.request().response_kind(), BodyKind::Json);
    }

    #[test]
    fn test_xml_body_sets_response_kind() {
        let executor = RequestBuilder::new(transport())
            .with_method(RestMethod::Put)
            .with_body_as(&payload(), BodyKind::Xml)
            .unwrap()
            .build_request()
            .unwrap();

        assert_eq!(executor.request().response_kind(), BodyKind::Xml);
    }

    #[test]
    fn test_response_kind_overrides_body_kind() {
        let executor = RequestBuilder::new(transport())
            .with_method(RestMethod::Post)
            .with_body(&payload())
            .unwrap()
            .with_response_kind(BodyKind::Xml)
            .build_request()
            .unwrap();

        assert_eq!(executor.request().response_kind(), BodyKind::Xml);
        assert_eq!(executor.request().headers()[ACCEPT], "application/xml");
    }

    #[test]
    fn test_nested_xml_body_rejected() {
        let deep = Deep { inner: payload() };
        let result = RequestBuilder::new(transport()).with_body_as(&deep, BodyKind::Xml);
        assert!(matches!(
            result,
            Err(RestError::Codec(CodecError::UnsupportedXmlShape { .. }))
        ));
    }

    #[test]
    fn test_missing_method() {
        let result = RequestBuilder::new(transport()).with_endpoint("/x").build_request();
        assert!(matches!(
            result,
            Err(RestError::Request(RequestError::MissingMethod))
        ));
    }

    #[test]
    fn test_timeout_falls_back_to_client_default() {
        let transport = HttpTransport::builder()
            .timeout(Duration::from_secs(9))
            .build()
            .unwrap();

        let default = RequestBuilder::new(transport.clone())
            .with_method(RestMethod::Get)
            .build_request()
            .unwrap();
        assert_eq!(default.request().timeout(), Some(Duration::from_secs(9)));

        let custom = RequestBuilder::new(transport)
            .with_method(RestMethod::Get)
            .with_timeout(Some(Duration::from_millis(250)))
            .build_request()
            .unwrap();
        assert_eq!(custom.request().timeout(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_authorization_twice_on_shared_transport() {
        let transport = transport();

        let first = RequestBuilder::new(transport.clone())
            .with_authorization(AuthorizationScheme::Bearer, "token-1");
        assert!(first.is_ok());

        let second = RequestBuilder::new(transport.clone())
            .with_authorization(AuthorizationScheme::Basic, "dXNlcjpwYXNz");
        assert!(matches!(
            second,
            Err(RestError::Config(ConfigError::AuthorizationAlreadySet {
                attempted: AuthorizationScheme::Basic
            }))
        ));

        let auth = transport.authorization().unwrap();
        assert_eq!(auth.header_string(), "Bearer token-1");
    }

    #[test]
    fn test_raw_authorization_header_rejected_when_installed() {
        let transport = transport();
        let allowed = RequestBuilder::new(transport.clone()).with_header("Authorization", "Token raw");
        assert!(allowed.is_ok());

        transport
            .install_authorization(Authorization::new(AuthorizationScheme::Bearer, "b").unwrap())
            .unwrap();
        let rejected = RequestBuilder::new(transport).with_header("authorization", "Token raw");
        assert!(matches!(
            rejected,
            Err(RestError::Config(ConfigError::AuthorizationAlreadySet {
                attempted: AuthorizationScheme::None
            }))
        ));
    }

    #[test]
    fn test_empty_credential_rejected() {
        let result = RequestBuilder::new(transport()).with_authorization(AuthorizationScheme::Bearer, "");
        assert!(matches!(
            result,
            Err(RestError::Validation(ValidationError::EmptyCredential))
        ));
    }
}
