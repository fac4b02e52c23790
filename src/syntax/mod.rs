//! Language-neutral syntax tree consumed by the symbol resolver.
//!
//! The parser layer lowers a concrete tree-sitter tree into this shape; tests
//! can also assemble trees by hand with [`SyntaxTree::add_node`].

mod line_index;
mod tree;

pub use line_index::LineIndex;
pub use tree::{Ancestors, NodeKind, SyntaxNode, SyntaxTree};
