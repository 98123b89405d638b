//! bintree: a binary container tree with structural-balance insertion.
//!
//! Layers:
//! - [`domain`]: the tree, its traversals, reports and rendering
//! - [`application`]: random generation, input parsing, statistics
//! - [`config`]: layered settings
//! - [`cli`]: argument parsing, dispatch and the interactive shell

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
