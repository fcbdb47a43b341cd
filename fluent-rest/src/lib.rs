//! Fluent HTTP request builder with a unified response model.
//!
//! The `fluent-rest` crate wraps a shared async HTTP client behind a chainable
//! builder. A request is assembled with `with_*` calls, frozen by
//! [`RequestBuilder::build_request`], and sent once by a [`RequestExecutor`].
//!
//! ## Features
//!
//! - **Chainable builder**: headers, query parameters, body, endpoint, method,
//!   timeout, authorization and response format
//! - **JSON and XML bodies**: encoded eagerly when set, decoded into `T` on
//!   typed sends, with configurable naming policy and case-insensitive keys
//! - **Unified responses**: transport failures come back as data, never as
//!   panics or bare errors, with status 500 and the failure message
//! - **Shared transport**: one pooled client per profile, handed out by a
//!   [`ClientFactory`] that can be loaded from YAML or JSON
//! - **Tracing**: every send runs in an instrumented span
//!
//! ## Example
//!
//! ```rust,ignore
//! use fluent_rest::{AuthorizationScheme, HttpTransport, RequestBuilder, RestMethod};
//!
//! #[derive(serde::Serialize)]
//! struct NewUser { name: String }
//!
//! #[derive(serde::Deserialize)]
//! struct User { id: u64, name: String }
//!
//! let transport = HttpTransport::builder()
//!     .base_url("https://api.example.com")?
//!     .build()?;
//!
//! let response = RequestBuilder::new(transport)
//!     .with_method(RestMethod::Post)
//!     .with_endpoint("/users")
//!     .with_body(&NewUser { name: "Ada".into() })?
//!     .with_authorization(AuthorizationScheme::Bearer, "sk-xxx")?
//!     .build_request()?
//!     .send_data::<User>()
//!     .await?;
//!
//! match response.data() {
//!     Some(user) => println!("created {}", user.id),
//!     None => eprintln!("{} {:?}", response.status_code(), response.error_body()),
//! }
//! ```

pub mod auth;
pub mod body;
pub mod client;
pub mod error;
pub mod method;
pub mod request;
pub mod response;

// Re-exports for convenience
pub use auth::{Authorization, AuthorizationScheme};
pub use body::{BodyKind, DecodeFailure, NamingPolicy, SerializerOptions};
pub use client::{
    ClientFactory, FactoryConfig, HttpTransport, HttpTransportBuilder, RequestExecutor,
    TransportConfig,
};
pub use error::{ClientError, CodecError, ConfigError, RequestError, RestError, ValidationError};
pub use method::RestMethod;
pub use request::{RequestBuilder, RequestDescriptor};
pub use response::{ResponseWithContent, ResponseWithData, RestResponse};
