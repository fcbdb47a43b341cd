//! Layered error types for the crate.
//!
//! The error hierarchy separates configuration mistakes from runtime failures:
//! - [`RestError`] - Top-level error type for all operations
//! - [`ValidationError`] - Malformed builder input (headers, credentials)
//! - [`ConfigError`] - Conflicting or missing configuration
//! - [`CodecError`] - Body encoding and decoding failures
//! - [`RequestError`] - Send-time preconditions that were not met
//! - [`ClientError`] - HTTP transport and network errors

mod client_error;
mod codec_error;
mod config_error;
mod request_error;
mod rest_error;
mod validation_error;

pub use client_error::ClientError;
pub use codec_error::CodecError;
pub use config_error::ConfigError;
pub use request_error::RequestError;
pub use rest_error::RestError;
pub use validation_error::ValidationError;
