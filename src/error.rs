//! Error types for symbol path resolution
//!
//! This module provides structured error types using thiserror for better
//! error handling and actionable error messages.

use std::path::PathBuf;
use thiserror::Error;

/// A single problem found in one raw diff line.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffProblem {
    #[error("line number should be an integer")]
    LineNotInteger,

    #[error("line number should be greater than 0")]
    LineNotPositive,

    #[error("status should be A, D, or M")]
    InvalidStatus,

    #[error("diff should not be empty")]
    EmptyContent,
}

/// Validation errors raised while building a diff collection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// Blank or missing raw line (`index` is 1-based)
    #[error("unexpected empty line at line {index}")]
    EmptyLine { index: usize },

    /// Every problem found in the first malformed raw line
    #[error("invalid diff \"{raw}\" at line {index}: {}", join_problems(.problems))]
    InvalidLine {
        index: usize,
        raw: String,
        problems: Vec<DiffProblem>,
    },
}

impl DiffError {
    /// 1-based index of the offending raw line
    pub fn index(&self) -> usize {
        match self {
            Self::EmptyLine { index } | Self::InvalidLine { index, .. } => *index,
        }
    }

    /// Problems reported for the line (empty for a blank line)
    pub fn problems(&self) -> &[DiffProblem] {
        match self {
            Self::EmptyLine { .. } => &[],
            Self::InvalidLine { problems, .. } => problems,
        }
    }
}

fn join_problems(problems: &[DiffProblem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Contract violations when querying the resolver
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// The node is absent or does not belong to the tree being queried
    #[error("invalid node")]
    InvalidNode,
}

/// Main error type for the command layer
#[derive(Error, Debug)]
pub enum SymbolPathError {
    /// File system errors
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Parser errors
    #[error("Failed to initialize {language} parser: {reason}")]
    ParserInit { language: String, reason: String },

    #[error("Failed to parse {language} file '{path}'")]
    ParseFailure { path: PathBuf, language: String },

    /// Diff input errors
    #[error("Invalid diff file '{path}': {source}")]
    InvalidDiff {
        path: PathBuf,
        #[source]
        source: DiffError,
    },

    /// Resolver contract violations
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Configuration errors
    #[error("Invalid configuration: {reason}")]
    ConfigError { reason: String },
}

impl SymbolPathError {
    /// Get a stable status code for this error type.
    ///
    /// Returns a string identifier that can be used in JSON responses
    /// for programmatic error handling.
    pub fn status_code(&self) -> String {
        match self {
            Self::FileRead { .. } => "FILE_READ_ERROR",
            Self::ParserInit { .. } => "PARSER_INIT_ERROR",
            Self::ParseFailure { .. } => "PARSE_ERROR",
            Self::InvalidDiff { .. } => "INVALID_DIFF",
            Self::Resolve(_) => "INVALID_NODE",
            Self::ConfigError { .. } => "CONFIG_ERROR",
        }
        .to_string()
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::FileRead { .. } => vec![
                "Check that the file exists and you have read permissions",
                "Ensure the file is not locked by another process",
            ],
            Self::InvalidDiff { .. } => vec![
                "Each diff line must look like '<line>|<status>|<content>'",
                "Status must be A, D or M and line numbers start at 1",
                "Check [diff] line_ending in settings.toml if the file uses CRLF",
            ],
            Self::ParseFailure { .. } => vec![
                "Check that the file contains JavaScript or TypeScript source",
                "Map the file extension to a grammar under [languages] in settings.toml",
            ],
            Self::ConfigError { .. } => vec![
                "Run 'symbolpath init --force' to regenerate settings.toml",
            ],
            _ => vec![],
        }
    }
}

/// Result type alias for command operations
pub type SymbolPathResult<T> = Result<T, SymbolPathError>;

/// Result type alias for diff construction
pub type DiffResult<T> = Result<T, DiffError>;

/// Result type alias for resolver queries
pub type ResolveResult<T> = Result<T, ResolveError>;
