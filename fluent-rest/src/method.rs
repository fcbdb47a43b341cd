//! HTTP method types for outgoing requests.

use strum::{Display, EnumIter, EnumString};

/// HTTP methods a request can be built with.
///
/// ## Examples
///
/// ```rust
/// use fluent_rest::RestMethod;
///
/// let method = RestMethod::Post;
/// assert!(method.requires_body());
/// assert!(method.attaches_body());
///
/// // Parse from string
/// let parsed: RestMethod = "DELETE".parse().unwrap();
/// assert!(!parsed.attaches_body());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource.
    Get,
    /// HTTP POST - Create a resource or trigger an action.
    Post,
    /// HTTP PUT - Replace a resource entirely.
    Put,
    /// HTTP PATCH - Partially update a resource.
    Patch,
    /// HTTP DELETE - Remove a resource.
    Delete,
    /// HTTP HEAD - Retrieve headers only.
    Head,
    /// HTTP OPTIONS - Query supported methods.
    Options,
    /// HTTP TRACE - Echo the request for debugging.
    Trace,
}

impl RestMethod {
    /// Returns `true` if a body configured on the builder is sent with this method.
    ///
    /// GET and DELETE never carry a body, even when one was configured.
    pub fn attaches_body(&self) -> bool {
        !matches!(self, Self::Get | Self::Delete)
    }

    /// Returns `true` if sending this method without a body is a usage error.
    pub fn requires_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
            Self::Head => reqwest::Method::HEAD,
            Self::Options => reqwest::Method::OPTIONS,
            Self::Trace => reqwest::Method::TRACE,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}
