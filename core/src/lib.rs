//! # simsci-core
//!
//! Shared building blocks for the libraries of the monorepo.
//!
//! Every domain library builds its entities on top of [`CoreUtility`] and
//! exposes the common greeting through the [`Greet`] capability.

pub mod error;
pub mod utils;

pub use error::ArgumentError;
pub use utils::{CoreUtility, Greet};
