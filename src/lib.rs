//! Resolve the enclosing symbol path of source lines.
//!
//! Given a JavaScript or TypeScript file, the crate finds the innermost
//! class, function, method or constructor containing a line and names it by
//! its dotted chain of enclosing declarations (`Outer.Inner.method`). Diff
//! listings of `<line>|<status>|<content>` entries can be annotated in one
//! pass over the syntax tree.

pub mod config;
pub mod diff;
pub mod error;
pub mod io;
pub mod logging;
pub mod parsing;
pub mod query;
pub mod symbol;
pub mod syntax;
pub mod types;

// Explicit exports for better API clarity
pub use config::Settings;
pub use diff::{ChangeStatus, DiffCollection, DiffRange, DiffRecord, LineEnding};
pub use error::{
    DiffError, DiffProblem, DiffResult, ResolveError, ResolveResult, SymbolPathError,
    SymbolPathResult,
};
pub use parsing::{Language, SourceParser};
pub use query::{PathResult, get_path, map_diffs_to_paths};
pub use symbol::{SymbolResolver, map_diffs_to_symbols};
pub use syntax::{NodeKind, SyntaxNode, SyntaxTree};
pub use types::{LineRange, NodeId};
