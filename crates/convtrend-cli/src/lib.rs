//! # convtrend
//!
//! Command-line front end that loads an experiment document and prints
//! chart-ready conversion-rate series as JSON.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;

pub use app::*;
pub use cli::Args;
pub use error::*;
