//! Blocking HTTP transport.

use reqwest::blocking::Client;
use std::time::Duration;

use crate::error::{Result, UpdaterError};

use super::{ReleaseRequest, ReleaseTransport, TransportResponse};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches release documents over HTTP/HTTPS.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new transport with the default 15-second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new transport with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UpdaterError::Transport {
                url: String::new(),
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }
}

impl ReleaseTransport for HttpTransport {
    fn get(&self, request: &ReleaseRequest) -> Result<TransportResponse> {
        let transport_error = |e: reqwest::Error| UpdaterError::Transport {
            url: request.url.clone(),
            message: e.to_string(),
        };

        let mut builder = self.client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        tracing::debug!("GET {}", request.url);
        let response = builder.send().map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(transport_error)?;

        Ok(TransportResponse { status, body })
    }
}
