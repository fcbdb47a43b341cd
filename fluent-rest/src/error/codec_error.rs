//! Body encoding and decoding errors.

use thiserror::Error;

/// Errors from the body encoder.
///
/// Encoding errors surface while the builder is configured; decoding errors
/// surface after a response has been received and are kept apart from
/// transport failures.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The body kind tag is not recognised.
    #[error("Unsupported body format: {0}")]
    UnsupportedFormat(String),

    /// The value cannot be expressed as flat XML.
    #[error("Unsupported XML body shape: {reason}")]
    UnsupportedXmlShape {
        /// What made the value unrepresentable.
        reason: String,
    },

    /// JSON serialization failed.
    #[error("JSON encode error: {0}")]
    JsonEncode(#[source] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON decode error: {0}")]
    JsonDecode(#[source] serde_json::Error),

    /// XML deserialization failed.
    #[error("XML decode error: {0}")]
    XmlDecode(#[from] quick_xml::DeError),
}

impl CodecError {
    /// Returns `true` if this error happened while decoding a response.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::JsonDecode(_) | Self::XmlDecode(_))
    }

    pub(crate) fn xml_shape(reason: impl Into<String>) -> Self {
        Self::UnsupportedXmlShape {
            reason: reason.into(),
        }
    }
}
