//! Exit codes for CLI operations following Unix conventions.
//!
//! # Exit Code Semantics
//!
//! - `0`: Success - operation completed (an unresolved line is still a success)
//! - `1`: General error - unspecified failure
//! - `4-6`: Specific recoverable errors
//! - `126-255`: Reserved by shell

use crate::error::SymbolPathError;

/// Standard exit codes for CLI operations.
///
/// These codes follow Unix conventions where 0 indicates success,
/// and non-zero values indicate various error conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation succeeded (code 0)
    Success = 0,

    /// Unspecified error occurred (code 1)
    GeneralError = 1,

    /// Failed to parse a source file or a diff listing (code 4)
    ParseError = 4,

    /// File I/O error (code 5)
    IoError = 5,

    /// Configuration error (code 6)
    ConfigError = 6,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl ExitCode {
    /// Convert a `SymbolPathError` to the appropriate exit code.
    pub fn from_error(error: &SymbolPathError) -> Self {
        match error {
            SymbolPathError::ParserInit { .. }
            | SymbolPathError::ParseFailure { .. }
            | SymbolPathError::InvalidDiff { .. } => ExitCode::ParseError,
            SymbolPathError::FileRead { .. } => ExitCode::IoError,
            SymbolPathError::ConfigError { .. } => ExitCode::ConfigError,
            SymbolPathError::Resolve(_) => ExitCode::GeneralError,
        }
    }
}
