pub mod extract;
pub mod render;
pub mod stats;
pub mod tree;

pub use extract::extract;
pub use tree::{Node, Tree};
