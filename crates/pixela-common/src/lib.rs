//! # Pixela Common
//!
//! Shared types, errors and the transport abstraction for the Pixela client.
//!
//! This crate provides the foundational pieces used across all other crates
//! in the workspace: the error enum, validated graph and pixel types, the
//! [`Transport`] trait and logging setup.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod logging;
pub mod macros;
pub mod transport;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{PixelaError, Result};
pub use logging::{init_default_logging, init_logging, LoggingConfig};
pub use transport::{ApiRequest, ApiResponse, HttpMethod, Transport, USER_TOKEN_HEADER};
pub use types::*;
