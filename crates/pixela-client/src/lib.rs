//! # Pixela Client
//!
//! Blocking client for the Pixela graph API: create an account, define a
//! graph, then record, update and delete daily pixels on it.
//!
//! ```no_run
//! use pixela_client::GraphTrackerClient;
//! use pixela_common::{GraphColor, ValueType};
//! use pixela_config::ConfigLoader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GraphTrackerClient::new(ConfigLoader::from_env()?)?;
//! let (graph, _) = client.create_graph(1, "Reading", "pages", ValueType::Int, GraphColor::Sora)?;
//! client.record_pixel(&graph, 2025, 9, 20, "10")?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod client;
pub mod models;
pub mod reporter;
pub mod transport;

pub use client::GraphTrackerClient;
pub use models::{
    CreateGraphRequest, CreateUserRequest, PixelaResponse, RecordPixelRequest, UpdatePixelRequest,
};
pub use reporter::{Operation, ResponseReporter, SilentReporter, TracingReporter};
pub use transport::HttpTransport;
