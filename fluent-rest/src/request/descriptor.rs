//! Immutable description of one outgoing request.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::HeaderMap;

use crate::body::{BodyKind, EncodedBody};
use crate::method::RestMethod;

/// A fully configured request, produced by
/// [`RequestBuilder::build_request`](super::RequestBuilder::build_request).
///
/// The descriptor is consumed by exactly one executor; nothing can change it
/// after construction.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    method: RestMethod,
    endpoint: String,
    query: BTreeMap<String, String>,
    target: String,
    headers: HeaderMap,
    body: Option<EncodedBody>,
    timeout: Option<Duration>,
    response_kind: BodyKind,
}

impl RequestDescriptor {
    pub(crate) fn new(
        method: RestMethod,
        endpoint: String,
        query: BTreeMap<String, String>,
        headers: HeaderMap,
        body: Option<EncodedBody>,
        timeout: Option<Duration>,
        response_kind: BodyKind,
    ) -> Self {
        let target = match encode_query(&query) {
            q if q.is_empty() => endpoint.clone(),
            q => format!("{endpoint}?{q}"),
        };
        let body = body.filter(|_| method.attaches_body());
        Self {
            method,
            endpoint,
            query,
            target,
            headers,
            body,
            timeout,
            response_kind,
        }
    }

    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// The endpoint path as configured, without the query string.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    /// The endpoint with its encoded query string, relative to the base URL.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The attached body. Always `None` for GET and DELETE.
    pub fn body(&self) -> Option<&EncodedBody> {
        self.body.as_ref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// The format used to decode the response body.
    pub fn response_kind(&self) -> BodyKind {
        self.response_kind
    }
}

/// Form-encodes each pair and joins them with `&`.
pub(crate) fn encode_query(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| {
            let key: String = url::form_urlencoded::byte_serialize(k.as_bytes()).collect();
            let value: String = url::form_urlencoded::byte_serialize(v.as_bytes()).collect();
            format!("{key}={value}")
        })
        .collect::<Vec<_>>()
        .join("&")
}
