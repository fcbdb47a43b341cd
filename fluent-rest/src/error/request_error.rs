//! Send-time precondition errors.

use thiserror::Error;

use crate::method::RestMethod;

/// Preconditions checked before any network I/O happens.
#[derive(Debug, Error)]
pub enum RequestError {
    /// POST and PUT requests must carry a body.
    #[error("Content must be set for {method} requests")]
    MissingBody {
        /// The method that requires a body.
        method: RestMethod,
    },

    /// The transport has no base address to resolve the endpoint against.
    #[error("Base URL must be set on the client")]
    MissingBaseUrl,

    /// `build_request` was called before a method was chosen.
    #[error("HTTP method must be set before building the request")]
    MissingMethod,
}
