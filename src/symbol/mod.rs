//! Symbol path resolution and diff annotation.

mod mapper;
pub(crate) mod resolver;

pub use mapper::map_diffs_to_symbols;
pub use resolver::{CONSTRUCTOR_SEGMENT, PATH_SEPARATOR, SymbolResolver};
