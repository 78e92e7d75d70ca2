//! Mock transport for testing.
//!
//! `MockTransport` implements [`ReleaseTransport`] and records every request
//! it receives. Clones share state, so a test can hand one clone to the
//! checker and keep another for assertions.
//!
//! # Example
//!
//! ```
//! use plugin_updater::fetch::{MockTransport, ReleaseRequest, ReleaseTransport};
//!
//! let transport = MockTransport::new();
//! transport.respond_with(200, r#"{"tag_name": "v1.0.0"}"#);
//!
//! let handle = transport.clone();
//! let response = transport.get(&ReleaseRequest::new("https://example.com")).unwrap();
//!
//! assert_eq!(response.status, 200);
//! assert_eq!(handle.calls(), 1);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::{Result, UpdaterError};

use super::{ReleaseRequest, ReleaseTransport, TransportResponse};

type Scripted = std::result::Result<TransportResponse, String>;

#[derive(Debug, Default)]
struct MockState {
    queued: VecDeque<Scripted>,
    fallback: Option<Scripted>,
    requests: Vec<ReleaseRequest>,
}

/// Scripted transport that counts calls.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// Create a transport with no responses configured.
    ///
    /// Requests fail with a transport error until a response is set.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Answer every request with this response.
    pub fn respond_with(&self, status: u16, body: impl Into<String>) {
        self.state().fallback = Some(Ok(TransportResponse {
            status,
            body: body.into(),
        }));
    }

    /// Fail every request with a transport error.
    pub fn fail_with(&self, message: impl Into<String>) {
        self.state().fallback = Some(Err(message.into()));
    }

    /// Answer the next request with this response, before the fallback.
    pub fn queue_response(&self, status: u16, body: impl Into<String>) {
        self.state().queued.push_back(Ok(TransportResponse {
            status,
            body: body.into(),
        }));
    }

    /// Fail the next request, before the fallback.
    pub fn queue_failure(&self, message: impl Into<String>) {
        self.state().queued.push_back(Err(message.into()));
    }

    /// Number of requests received.
    pub fn calls(&self) -> usize {
        self.state().requests.len()
    }

    /// All requests received, oldest first.
    pub fn requests(&self) -> Vec<ReleaseRequest> {
        self.state().requests.clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<ReleaseRequest> {
        self.state().requests.last().cloned()
    }
}

impl ReleaseTransport for MockTransport {
    fn get(&self, request: &ReleaseRequest) -> Result<TransportResponse> {
        let mut state = self.state();
        state.requests.push(request.clone());

        let scripted = state
            .queued
            .pop_front()
            .or_else(|| state.fallback.clone())
            .unwrap_or_else(|| Err("no response configured".to_string()));

        scripted.map_err(|message| UpdaterError::Transport {
            url: request.url.clone(),
            message,
        })
    }
}
