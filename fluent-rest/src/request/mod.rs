//! Request construction.
//!
//! [`RequestBuilder`] accumulates configuration through chained `with_*`
//! calls and turns it into an immutable [`RequestDescriptor`] bound to a
//! [`RequestExecutor`](crate::client::RequestExecutor).
//!
//! ## Examples
//!
//! ```rust,ignore
//! use fluent_rest::{HttpTransport, RequestBuilder, RestMethod};
//!
//! let transport = HttpTransport::builder().base_url("https://api.example.com")?.build()?;
//! let executor = RequestBuilder::new(transport)
//!     .with_method(RestMethod::Get)
//!     .with_endpoint("/users")
//!     .with_query_parameter("page", "2")
//!     .with_header("X-Request-Id", "abc")?
//!     .build_request()?;
//!
//! let response = executor.send().await;
//! ```

mod builder;
mod descriptor;

pub use builder::RequestBuilder;
pub(crate) use builder::parse_header;
pub use descriptor::RequestDescriptor;
