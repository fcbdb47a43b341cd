//! Wire format tag.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::CodecError;

/// Selects how a body is serialized on the way out and deserialized on the
/// way back.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    /// `application/json`
    #[default]
    Json,
    /// `application/xml`
    Xml,
}

impl BodyKind {
    /// Returns the Content-Type sent with a body of this kind.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json; charset=utf-8",
            Self::Xml => "application/xml; charset=utf-8",
        }
    }

    /// Returns the media type used for `Accept` negotiation.
    pub fn media_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
        }
    }

    /// Parses a format tag such as `"json"` or `"XML"`.
    ///
    /// ## Errors
    ///
    /// Returns [`CodecError::UnsupportedFormat`] for any other tag.
    pub fn from_tag(tag: &str) -> Result<Self, CodecError> {
        tag.parse()
            .map_err(|_| CodecError::UnsupportedFormat(tag.to_string()))
    }
}
