//! HTTP client module.
//!
//! This module provides the shared [`HttpTransport`], the [`RequestExecutor`]
//! that sends one built request with tracing instrumentation, and the
//! [`ClientFactory`] that hands pre-configured transports to builders.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use fluent_rest::client::{ClientFactory, FactoryConfig};
//! use fluent_rest::RestMethod;
//!
//! #[derive(serde::Deserialize)]
//! struct Invoice { id: u64, total: f64 }
//!
//! let config = FactoryConfig::from_yaml(&std::fs::read_to_string("clients.yaml")?)?;
//! let factory = ClientFactory::from_config(config)?;
//!
//! let response = factory
//!     .create_named_client("billing")?
//!     .with_method(RestMethod::Get)
//!     .with_endpoint("invoices/42")
//!     .build_request()?
//!     .send_data::<Invoice>()
//!     .await?;
//! ```

mod config;
mod executor;
mod factory;
mod transport;

pub use config::{AuthorizationConfig, FactoryConfig, TransportConfig};
pub use executor::RequestExecutor;
pub use factory::ClientFactory;
pub use transport::{HttpTransport, HttpTransportBuilder};
