//! Node view over the flat macro namespace.
//!
//! The generated header never materializes a tree: hierarchy exists only
//! in the macro names. This module reconstructs it on demand. A [`Node`]
//! is an ephemeral value computed from a table reference and a path;
//! parent links, status, ordinals and attributes are all O(1) key
//! lookups, never a graph traversal.

mod enumerate;
mod node;

pub use enumerate::{all_nodes, okay_nodes};
pub use node::Node;
