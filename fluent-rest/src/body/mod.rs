//! Request and response body serialization.
//!
//! This module provides the [`BodyKind`] tag that selects the wire format,
//! the [`EncodedBody`] value object produced eagerly by the builder, and the
//! [`encode`] / [`decode`] functions shared by the builder and the executor.
//!
//! ## Examples
//!
//! ```rust
//! use fluent_rest::body::{decode, encode, BodyKind, SerializerOptions};
//!
//! #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
//! struct Item { id: u32, name: String }
//!
//! let options = SerializerOptions::default();
//! let item = Item { id: 7, name: "bolt".into() };
//!
//! let body = encode(&item, BodyKind::Xml, &options).unwrap();
//! assert_eq!(body.as_str(), Some("<root><id>7</id><name>bolt</name></root>"));
//!
//! let back: Option<Item> = decode(body.as_str().unwrap(), BodyKind::Xml, &options).unwrap();
//! assert_eq!(back, Some(item));
//! ```

mod encoder;
mod kind;
mod matching;
mod naming;
mod options;
mod renaming;

pub use encoder::{decode, encode, EncodedBody, XML_ROOT_ELEMENT};
pub use kind::BodyKind;
pub use naming::NamingPolicy;
pub use options::{DecodeFailure, SerializerOptions};
