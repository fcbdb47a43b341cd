//! Pure mapping from transport results to response values.

use reqwest::StatusCode;

use super::{ResponseWithContent, ResponseWithData, RestResponse};

/// A completed HTTP exchange described as plain data.
///
/// Produced by the transport once the body has been read in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub reason: Option<String>,
    pub content: String,
}

impl TransportResponse {
    /// Creates a response using the canonical reason phrase for `status`.
    pub fn new(status: StatusCode, content: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_string),
            content: content.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn base(&self, error_body: Option<String>) -> RestResponse {
        RestResponse::new(
            self.is_success(),
            self.status,
            self.reason.clone(),
            error_body,
        )
    }
}

/// Maps an untyped exchange, keeping the raw content whatever the status.
///
/// On a non-success status the content is also reported as the error body.
pub fn map_response(response: TransportResponse) -> ResponseWithContent {
    let error_body = (!response.is_success()).then(|| response.content.clone());
    let base = response.base(error_body);
    ResponseWithContent::new(base, Some(response.content))
}

/// Maps a typed exchange.
///
/// The error body holds the raw content when the status is not successful and
/// is blank otherwise; on success the content is the payload, not a diagnostic.
pub fn map_response_with_data<T>(response: TransportResponse, data: Option<T>) -> ResponseWithData<T> {
    let success = response.is_success();
    let error_body = if success {
        String::new()
    } else {
        response.content.clone()
    };
    let data = if success { data } else { None };
    ResponseWithData::new(response.base(Some(error_body)), data)
}
