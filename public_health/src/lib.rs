//! Example public health functionality built on [`simsci_core`].

pub mod models;

pub use models::{HealthModel, hello_public_health};
