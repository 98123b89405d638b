//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Randomness is always injected by the caller.

mod generator;
mod statistics;
mod tree_service;

pub use generator::{rng_from_seed, RandomTreeGenerator, MAX_COUNT};
pub use statistics::{complete_report, TreeStatistics};
pub use tree_service::{Lookup, TreeService};
