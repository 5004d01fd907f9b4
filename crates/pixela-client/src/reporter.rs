//! Reporting of decoded responses.
//!
//! Operations never print. After each successful round trip the client hands
//! the response to a [`ResponseReporter`], and the caller picks the reporter.

use crate::models::PixelaResponse;
use std::fmt;
use tracing::{info, warn};

/// The five client operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `POST /v1/users`
    CreateAccount,
    /// `POST /v1/users/{username}/graphs`
    CreateGraph,
    /// `POST /v1/users/{username}/graphs/{graphId}`
    RecordPixel,
    /// `PUT /v1/users/{username}/graphs/{graphId}/{date}`
    UpdatePixel,
    /// `DELETE /v1/users/{username}/graphs/{graphId}/{date}`
    DeletePixel,
}

impl Operation {
    /// Snake-case name used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateAccount => "create_account",
            Self::CreateGraph => "create_graph",
            Self::RecordPixel => "record_pixel",
            Self::UpdatePixel => "update_pixel",
            Self::DeletePixel => "delete_pixel",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives every response the client returns to its caller.
pub trait ResponseReporter: Send + Sync {
    /// Called once per successful round trip, before the response is returned.
    fn report(&self, operation: Operation, response: &PixelaResponse);
}

/// Emits the response diagnostic as a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ResponseReporter for TracingReporter {
    fn report(&self, operation: Operation, response: &PixelaResponse) {
        if response.is_rejected() {
            warn!(%operation, "{}", response.diagnostic());
        } else {
            info!(%operation, "{}", response.diagnostic());
        }
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl ResponseReporter for SilentReporter {
    fn report(&self, _operation: Operation, _response: &PixelaResponse) {}
}

impl<F> ResponseReporter for F
where
    F: Fn(Operation, &PixelaResponse) + Send + Sync,
{
    fn report(&self, operation: Operation, response: &PixelaResponse) {
        self(operation, response);
    }
}
