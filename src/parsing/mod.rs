//! Source parsing: grammar selection and lowering into [`SyntaxTree`]s.
//!
//! [`SyntaxTree`]: crate::syntax::SyntaxTree

pub mod language;
pub mod parser;
pub mod typescript;

pub use language::Language;
pub use parser::SourceParser;
