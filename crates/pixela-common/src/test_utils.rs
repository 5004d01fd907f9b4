//! Test utilities shared by the crates in this workspace.
//!
//! Provides a recording fake [`Transport`] and canned Pixela response bodies so
//! client behaviour can be tested without touching the network.

use crate::error::{PixelaError, Result};
use crate::transport::{ApiRequest, ApiResponse, Transport};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests. Safe to call multiple times.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
        // another test harness may already own the global subscriber
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Body the service sends on success.
pub fn success_body() -> Value {
    json!({"message": "Success.", "isSuccess": true})
}

/// Body the service sends when it refuses a request.
pub fn rejection_body(message: &str) -> Value {
    json!({"message": message, "isSuccess": false})
}

/// A [`Transport`] that records every request and replays queued outcomes.
///
/// When the queue is empty it answers `200` with [`success_body`].
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    outcomes: Mutex<VecDeque<Result<ApiResponse>>>,
}

impl RecordingTransport {
    /// Creates a transport that answers every request with success.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response with the given status and body.
    #[must_use]
    pub fn with_response(self, status: u16, body: Value) -> Self {
        self.outcomes
            .lock()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    /// Queues a transport failure.
    #[must_use]
    pub fn with_error(self, error: PixelaError) -> Self {
        self.outcomes.lock().push_back(Err(error));
        self
    }

    /// Every request seen so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    /// Number of requests seen so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().last().cloned()
    }
}

impl Transport for RecordingTransport {
    fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().push(request);
        self.outcomes
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse::new(200, success_body())))
    }
}

/// Property-based testing strategies.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for (year, month, day) triples that are always valid dates.
    pub fn valid_ymd_strategy() -> impl Strategy<Value = (i32, u32, u32)> {
        (1i32..=9999, 1u32..=12, 1u32..=28)
    }

    /// Strategy for usernames the service accepts.
    pub fn username_strategy() -> impl Strategy<Value = String> {
        r"[a-z][a-z0-9-]{1,32}".prop_map(|s| s)
    }

    /// Strategy for tokens the service accepts.
    pub fn token_strategy() -> impl Strategy<Value = String> {
        r"[!-~]{8,128}".prop_map(|s| s)
    }
}
