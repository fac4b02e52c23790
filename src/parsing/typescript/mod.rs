//! JavaScript and TypeScript support
//!
//! tree-sitter-javascript and tree-sitter-typescript name their declaration
//! nodes identically, so a single lowering covers both grammars.

pub mod lower;

pub use lower::{classify, lower, name_of};
