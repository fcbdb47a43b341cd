//! Response value types.

use std::fmt::Display;
use std::ops::Deref;

/// Status code reported when a request failed before a response arrived.
pub const REQUEST_FAILED_STATUS: u16 = 500;

/// Status description reported alongside [`REQUEST_FAILED_STATUS`].
pub const REQUEST_FAILED_DESCRIPTION: &str = "Request failed";

/// Status metadata common to every response.
///
/// Fields are fixed at construction; callers only read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestResponse {
    is_successful: bool,
    status_code: u16,
    status_description: Option<String>,
    error_body: Option<String>,
}

impl RestResponse {
    pub(crate) fn new(
        is_successful: bool,
        status_code: u16,
        status_description: Option<String>,
        error_body: Option<String>,
    ) -> Self {
        Self {
            is_successful,
            status_code,
            status_description,
            error_body,
        }
    }

    /// Builds the response reported when a request could not complete.
    pub(crate) fn failed(error: &dyn Display) -> Self {
        Self::new(
            false,
            REQUEST_FAILED_STATUS,
            Some(REQUEST_FAILED_DESCRIPTION.to_string()),
            Some(error.to_string()),
        )
    }

    /// Returns `true` for a 2xx status.
    pub fn is_successful(&self) -> bool {
        self.is_successful
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The reason phrase, e.g. `"Not Found"`.
    pub fn status_description(&self) -> Option<&str> {
        self.status_description.as_deref()
    }

    /// Diagnostic text for failed requests.
    pub fn error_body(&self) -> Option<&str> {
        self.error_body.as_deref()
    }
}

/// Response of an untyped send, carrying the raw content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseWithContent {
    response: RestResponse,
    content: Option<String>,
}

impl ResponseWithContent {
    pub(crate) fn new(response: RestResponse, content: Option<String>) -> Self {
        Self { response, content }
    }

    pub(crate) fn failed(error: &dyn Display) -> Self {
        Self::new(RestResponse::failed(error), None)
    }

    /// The raw response body. `None` when the request failed in flight.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn into_content(self) -> Option<String> {
        self.content
    }
}

impl Deref for ResponseWithContent {
    type Target = RestResponse;

    fn deref(&self) -> &Self::Target {
        &self.response
    }
}

/// Response of a typed send.
///
/// `data` is present only when the status was successful and the body
/// decoded to a value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseWithData<T> {
    response: RestResponse,
    data: Option<T>,
}

impl<T> ResponseWithData<T> {
    pub(crate) fn new(response: RestResponse, data: Option<T>) -> Self {
        Self { response, data }
    }

    pub(crate) fn failed(error: &dyn Display) -> Self {
        Self::new(RestResponse::failed(error), None)
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Splits into the status metadata and the decoded value.
    pub fn into_parts(self) -> (RestResponse, Option<T>) {
        (self.response, self.data)
    }
}

impl<T> Deref for ResponseWithData<T> {
    type Target = RestResponse;

    fn deref(&self) -> &Self::Target {
        &self.response
    }
}
