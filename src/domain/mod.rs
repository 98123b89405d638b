//! Domain layer: the binary container tree and its read-only views
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod display;
pub mod error;
pub mod node;
pub mod report;
pub mod tree;
pub mod walk;

pub use display::TreeRender;
pub use error::{TreeError, TreeResult};
pub use node::{Node, ROOT_PATH};
pub use tree::BinaryContainerTree;
pub use walk::{NodeView, NodeWalk, Traversal, TraversalOrder};
