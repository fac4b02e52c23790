//! Format definitions for CLI output.
//!
//! Provides the output modes of the commands and the JSON envelope used to
//! report errors to tools.

use crate::error::SymbolPathError;
use crate::io::exit_code::ExitCode;
use serde::{Deserialize, Serialize};

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
    /// Single-line JSON
    JsonCompact,
}

impl OutputFormat {
    /// Format of `get-path`: text unless `--json` or `--minified` is given.
    #[must_use]
    pub fn from_json_flags(json: bool, minified: bool) -> Self {
        match (json, minified) {
            (_, true) => Self::JsonCompact,
            (true, false) => Self::Json,
            (false, false) => Self::Text,
        }
    }

    /// Format of `map-diffs-to-paths`: compact JSON unless asked otherwise.
    #[must_use]
    pub fn for_diff_listing(pretty: bool, plain: bool) -> Self {
        if plain {
            Self::Text
        } else if pretty {
            Self::Json
        } else {
            Self::JsonCompact
        }
    }

    /// Check if format is JSON.
    #[must_use]
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json | Self::JsonCompact)
    }
}

/// JSON envelope for errors of JSON-mode commands.
///
/// Written to stderr so stdout only ever carries results.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonResponse {
    /// Always "error"
    pub status: String,

    /// Stable error code (e.g., "INVALID_DIFF", "FILE_READ_ERROR")
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Error details and suggestions
    pub error: ErrorDetails,

    /// Exit code for shell scripts
    pub exit_code: u8,

    /// Metadata (version, etc.)
    pub meta: ResponseMeta,
}

/// Error details for JSON responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Recovery suggestions
    pub suggestions: Vec<String>,
    /// Additional error context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

/// Response metadata.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// Version of the tool
    pub version: String,
}

impl Default for ResponseMeta {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl JsonResponse {
    /// Create an error response from SymbolPathError.
    pub fn from_error(error: &SymbolPathError) -> Self {
        let context = match error {
            SymbolPathError::InvalidDiff { source, .. } => Some(serde_json::json!({
                "line": source.index(),
                "problems": source
                    .problems()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>(),
            })),
            _ => None,
        };

        Self {
            status: "error".to_string(),
            code: error.status_code(),
            message: error.to_string(),
            error: ErrorDetails {
                suggestions: error
                    .recovery_suggestions()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                context,
            },
            exit_code: ExitCode::from_error(error) as u8,
            meta: ResponseMeta::default(),
        }
    }
}
