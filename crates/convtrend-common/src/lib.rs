//! # convtrend common
//!
//! Shared types, errors, and logging bootstrap for the convtrend workspace.
//!
//! This crate provides the foundational types used across the other crates:
//! the variation identity newtype, the view mode selector, the workspace error
//! type and the `tracing` subscriber setup.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{ConvTrendError, Result};
pub use logging::{init_logging, LoggingConfig};
pub use types::*;
pub use utils::*;
