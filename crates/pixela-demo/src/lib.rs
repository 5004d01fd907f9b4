//! # Pixela Demo
//!
//! Sequential walk-through of the Pixela client, driven from the command line.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod demo;

pub use cli::Args;
pub use demo::{run_demo, DemoPlan, DemoReport};
