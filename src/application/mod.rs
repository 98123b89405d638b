//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic: random generation, parsing of raw
//! user input and the statistics report.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};

/// Value type stored by the trees the application works with.
pub type Value = i32;
