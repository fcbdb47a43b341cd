//! Eager body encoding and typed response decoding.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::matching::FieldMatching;
use super::renaming::FieldRenaming;
use super::{BodyKind, NamingPolicy, SerializerOptions};
use crate::error::CodecError;

/// Name of the element wrapping every XML body.
pub const XML_ROOT_ELEMENT: &str = "root";

/// A body that has already been serialized, together with its format.
///
/// The builder stores this value as soon as `with_body` is called; nothing is
/// serialized lazily at send time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBody {
    bytes: Bytes,
    kind: BodyKind,
}

impl EncodedBody {
    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    pub fn content_type(&self) -> &'static str {
        self.kind.content_type()
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Returns the body as text. Encoded bodies are always UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Serializes `value` into a body of the given kind.
///
/// JSON honours the naming policy and pretty-printing options. XML maps each
/// top-level field to a same-named leaf element under `<root>`; only flat
/// values with scalar fields can be written.
///
/// ## Errors
///
/// Returns [`CodecError::UnsupportedXmlShape`] for nested or non-struct XML
/// values and [`CodecError::JsonEncode`] if serde serialization fails.
pub fn encode<T>(
    value: &T,
    kind: BodyKind,
    options: &SerializerOptions,
) -> Result<EncodedBody, CodecError>
where
    T: Serialize + ?Sized,
{
    let bytes = match kind {
        BodyKind::Json => encode_json(value, options)?,
        BodyKind::Xml => encode_xml(value)?.into_bytes(),
    };
    Ok(EncodedBody {
        bytes: Bytes::from(bytes),
        kind,
    })
}

/// Deserializes response content.
///
/// Empty or whitespace-only content yields `Ok(None)`.
///
/// ## Errors
///
/// Returns [`CodecError::JsonDecode`] or [`CodecError::XmlDecode`] when the
/// content does not match `T`.
pub fn decode<T>(
    content: &str,
    kind: BodyKind,
    options: &SerializerOptions,
) -> Result<Option<T>, CodecError>
where
    T: DeserializeOwned,
{
    if content.trim().is_empty() {
        return Ok(None);
    }
    match kind {
        BodyKind::Json => decode_json(content, options).map(Some),
        BodyKind::Xml => quick_xml::de::from_str(content)
            .map(Some)
            .map_err(CodecError::XmlDecode),
    }
}

fn encode_json<T>(value: &T, options: &SerializerOptions) -> Result<Vec<u8>, CodecError>
where
    T: Serialize + ?Sized,
{
    let written = if options.naming_policy == NamingPolicy::AsIs {
        if options.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        }
    } else {
        let renaming = FieldRenaming::new(serde_json::value::Serializer, options.naming_policy);
        let tree = value.serialize(renaming).map_err(CodecError::JsonEncode)?;
        if options.pretty {
            serde_json::to_vec_pretty(&tree)
        } else {
            serde_json::to_vec(&tree)
        }
    };
    written.map_err(CodecError::JsonEncode)
}

fn decode_json<T>(content: &str, options: &SerializerOptions) -> Result<T, CodecError>
where
    T: DeserializeOwned,
{
    if !options.normalizes_keys() {
        return serde_json::from_str(content).map_err(CodecError::JsonDecode);
    }
    let tree: Value = serde_json::from_str(content).map_err(CodecError::JsonDecode)?;
    T::deserialize(FieldMatching::new(tree)).map_err(CodecError::JsonDecode)
}

fn encode_xml<T>(value: &T) -> Result<String, CodecError>
where
    T: Serialize + ?Sized,
{
    let Value::Object(fields) = serde_json::to_value(value).map_err(CodecError::JsonEncode)?
    else {
        return Err(CodecError::xml_shape(
            "only values with named fields can be written as XML",
        ));
    };

    let mut xml = format!("<{XML_ROOT_ELEMENT}>");
    for (name, field) in &fields {
        if !is_element_name(name) {
            return Err(CodecError::xml_shape(format!(
                "'{name}' is not a valid element name"
            )));
        }
        let text = match field {
            Value::Null => {
                xml.push_str(&format!("<{name}/>"));
                continue;
            }
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => quick_xml::escape::escape(s.as_str()).into_owned(),
            Value::Array(_) | Value::Object(_) => {
                return Err(CodecError::xml_shape(format!(
                    "field '{name}' is not a scalar"
                )));
            }
        };
        xml.push_str(&format!("<{name}>{text}</{name}>"));
    }
    xml.push_str(&format!("</{XML_ROOT_ELEMENT}>"));
    Ok(xml)
}

fn is_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
