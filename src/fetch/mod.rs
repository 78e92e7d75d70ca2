//! Release API transport.
//!
//! The checker talks to the release API through [`ReleaseTransport`], so
//! tests can substitute [`MockTransport`] and count calls. [`HttpTransport`]
//! is the real blocking HTTP implementation.

pub mod http;
pub mod mock;

pub use http::{HttpTransport, DEFAULT_TIMEOUT};
pub use mock::MockTransport;

use crate::error::Result;

/// An outbound GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRequest {
    /// Full request URL.
    pub url: String,
    /// Request headers, in the order they should be sent.
    pub headers: Vec<(String, String)>,
}

impl ReleaseRequest {
    /// Create a request with no headers.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
        }
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Response to a [`ReleaseRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

/// Performs GET requests against the release API.
pub trait ReleaseTransport: Send + Sync {
    /// Send the request and return the raw response.
    ///
    /// Only transport-level failures (connection, timeout) are errors; any
    /// HTTP status is returned as a response.
    fn get(&self, request: &ReleaseRequest) -> Result<TransportResponse>;
}
