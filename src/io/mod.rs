//! Input/Output handling for the CLI.
//!
//! This module provides:
//! - Unified output formatting (text, JSON)
//! - Consistent error handling and exit codes
//! - JSON Lines dumps of lowered syntax trees

pub mod exit_code;
pub mod format;
pub mod output;
pub mod parse;

pub use exit_code::ExitCode;
pub use format::{ErrorDetails, JsonResponse, OutputFormat, ResponseMeta};
pub use output::OutputManager;
pub use parse::{NodeInfo, ParseOutput, stream_tree};
