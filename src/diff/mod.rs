//! Diff listings: validation, line lookup and symbol annotation.

mod collection;
mod lines;
mod record;

pub use collection::{DiffCollection, DiffRange, FIELD_SEPARATOR};
pub use lines::{LineEnding, split_lines};
pub use record::{ChangeStatus, DiffRecord};
