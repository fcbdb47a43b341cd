//! Request execution with tracing instrumentation.
//!
//! This module provides the [`RequestExecutor`] that validates a built
//! request, sends it through the shared transport and maps the outcome into
//! the unified response model.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn, Span};

use super::HttpTransport;
use crate::body::{decode, DecodeFailure, SerializerOptions};
use crate::error::{ClientError, RequestError, RestError};
use crate::request::RequestDescriptor;
use crate::response::{
    map_response, map_response_with_data, ResponseWithContent, ResponseWithData, TransportResponse,
};

/// Sends one built request.
///
/// The executor owns its [`RequestDescriptor`] and is consumed by the send,
/// so a request is executed exactly once. It shares the transport with the
/// builder that produced it; dropping the executor leaves the transport open.
///
/// ## Examples
///
/// ```rust,ignore
/// use fluent_rest::{RequestBuilder, RestMethod};
///
/// #[derive(serde::Deserialize)]
/// struct User { id: u64, name: String }
///
/// let response = RequestBuilder::new(transport)
///     .with_method(RestMethod::Get)
///     .with_endpoint("/users/1")
///     .build_request()?
///     .send_data::<User>()
///     .await?;
///
/// if let Some(user) = response.data() {
///     println!("User: {}", user.name);
/// } else {
///     eprintln!("{}: {:?}", response.status_code(), response.error_body());
/// }
/// ```
#[derive(Debug)]
pub struct RequestExecutor {
    transport: HttpTransport,
    request: RequestDescriptor,
    options: Arc<SerializerOptions>,
    cancellation: Option<CancellationToken>,
}

impl RequestExecutor {
    pub(crate) fn new(
        transport: HttpTransport,
        request: RequestDescriptor,
        options: Arc<SerializerOptions>,
    ) -> Self {
        Self {
            transport,
            request,
            options,
            cancellation: None,
        }
    }

    /// The request this executor will send.
    pub fn request(&self) -> &RequestDescriptor {
        &self.request
    }

    /// The shared transport the request is sent through.
    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    /// Aborts the send when `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Checks the send-time preconditions without touching the network.
    ///
    /// ## Errors
    ///
    /// Returns [`RequestError::MissingBody`] for a POST or PUT without a body
    /// and [`RequestError::MissingBaseUrl`] if the transport has no base address.
    pub fn validate(&self) -> Result<(), RequestError> {
        let method = self.request.method();
        if method.requires_body() && self.request.body().is_none() {
            return Err(RequestError::MissingBody { method });
        }
        if self.transport.base_url().is_none() {
            return Err(RequestError::MissingBaseUrl);
        }
        Ok(())
    }

    /// Sends the request and returns the raw content.
    ///
    /// Never fails: precondition violations, network errors and cancellation
    /// all produce an unsuccessful response with status 500, the description
    /// `"Request failed"` and the error message as error body.
    #[instrument(
        name = "rest_request",
        skip(self),
        fields(
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn send(self) -> ResponseWithContent {
        self.record_request();

        if let Err(e) = self.validate() {
            return ResponseWithContent::failed(&reject(e));
        }

        match self.dispatch().await {
            Ok(response) => map_response(response),
            Err(e) => ResponseWithContent::failed(&report(e)),
        }
    }

    /// Sends the request and decodes a successful body into `T`.
    ///
    /// The body is decoded with the request's response kind. On a
    /// non-success status the content is returned as the error body and is
    /// not parsed. Network errors and cancellation produce the same failure
    /// response as [`send`](Self::send). What happens when a successful body
    /// does not decode is chosen by [`DecodeFailure`].
    ///
    /// ## Errors
    ///
    /// Unlike [`send`](Self::send), a violated send-time precondition is
    /// returned as [`RestError::Request`]: it is a programming error rather
    /// than a runtime failure. [`DecodeFailure::Propagate`] also returns
    /// [`RestError::Codec`].
    #[instrument(
        name = "rest_request",
        skip(self),
        fields(
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn send_data<T>(self) -> Result<ResponseWithData<T>, RestError>
    where
        T: DeserializeOwned,
    {
        self.record_request();

        if let Err(e) = self.validate() {
            return Err(reject(e).into());
        }

        let response = match self.dispatch().await {
            Ok(response) => response,
            Err(e) => return Ok(ResponseWithData::failed(&report(e))),
        };

        if !response.is_success() {
            return Ok(map_response_with_data(response, None));
        }

        let kind = self.request.response_kind();
        match decode::<T>(&response.content, kind, &self.options) {
            Ok(data) => {
                debug!(body.kind = %kind, has_data = data.is_some(), "Decoded response body");
                Ok(map_response_with_data(response, data))
            }
            Err(e) => match self.options.decode_failure {
                DecodeFailure::Report => {
                    warn!(error = %e, "Response body could not be decoded");
                    Span::current().record("otel.status_code", "ERROR");
                    Ok(ResponseWithData::failed(&e))
                }
                DecodeFailure::Discard => {
                    debug!(error = %e, "Discarding undecodable response body");
                    Ok(map_response_with_data(response, None))
                }
                DecodeFailure::Propagate => Err(e.into()),
            },
        }
    }

    fn record_request(&self) {
        let span = Span::current();
        span.record("http.method", self.request.method().to_string().as_str());
        match self.transport.resolve(self.request.target()) {
            Ok(url) => span.record("http.url", url.as_str()),
            Err(_) => span.record("http.url", self.request.target()),
        };
    }

    async fn dispatch(&self) -> Result<TransportResponse, ClientError> {
        debug!(has_body = self.request.body().is_some(), "Sending request");
        let response = self
            .transport
            .send(&self.request, self.cancellation.as_ref())
            .await?;

        let span = Span::current();
        span.record("http.status_code", response.status);
        let otel_status = if response.is_success() {
            "OK"
        } else if response.status >= 500 {
            "ERROR"
        } else {
            "UNSET"
        };
        span.record("otel.status_code", otel_status);

        debug!(
            http.status_code = response.status,
            content_length = response.content.len(),
            "Received HTTP response"
        );
        Ok(response)
    }
}

fn reject(error: RequestError) -> RequestError {
    warn!(error = %error, "Request rejected before sending");
    Span::current().record("otel.status_code", "ERROR");
    error
}

fn report(error: ClientError) -> ClientError {
    warn!(error = %error, "Request failed");
    Span::current().record("otel.status_code", "ERROR");
    error
}
