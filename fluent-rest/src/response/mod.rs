//! Unified response model.
//!
//! Every send operation returns one of the shapes defined here instead of
//! raising transport errors: [`ResponseWithContent`] for untyped sends and
//! [`ResponseWithData`] for typed sends. Both dereference to the shared
//! [`RestResponse`] status fields. The [`mapper`] functions build them from a
//! [`TransportResponse`].

pub mod mapper;
mod types;

pub use mapper::{map_response, map_response_with_data, TransportResponse};
pub use types::{
    ResponseWithContent, ResponseWithData, RestResponse, REQUEST_FAILED_DESCRIPTION,
    REQUEST_FAILED_STATUS,
};
