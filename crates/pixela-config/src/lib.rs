//! # Pixela Config
//!
//! Credential and endpoint configuration for the Pixela client.
//!
//! Configuration is read once from the environment (`TOKEN`, `USER_NAME` and
//! optional `PIXELA_*` overrides), validated, and then handed to the client
//! as an immutable value.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validation;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
