//! Input resolution and tree layout

pub mod ancestor;
pub mod resolver;
pub mod tree;

pub use ancestor::common_ancestor;
pub use resolver::PathResolver;
pub use tree::{generate_tree, root_label};
