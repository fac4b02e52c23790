//! Output management for CLI commands.
//!
//! Handles formatting and display for different output formats,
//! providing a unified interface for text and JSON output.

use crate::diff::DiffCollection;
use crate::error::SymbolPathError;
use crate::io::exit_code::ExitCode;
use crate::io::format::{JsonResponse, OutputFormat};
use crate::query::PathResult;
use serde::Serialize;
use std::io::{self, Write};

/// Manages output formatting and display.
///
/// Results go to stdout; errors and diagnostics go to stderr so that
/// stdout stays machine-readable.
pub struct OutputManager {
    format: OutputFormat,
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
}

impl OutputManager {
    /// Create a new output manager with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            stdout: Box::new(io::stdout()),
            stderr: Box::new(io::stderr()),
        }
    }

    /// Create an output manager for testing with custom writers.
    #[cfg(test)]
    pub fn new_with_writers(
        format: OutputFormat,
        stdout: Box<dyn Write>,
        stderr: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            stdout,
            stderr,
        }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        let json = match self.format {
            OutputFormat::JsonCompact => serde_json::to_string(value)?,
            _ => serde_json::to_string_pretty(value)?,
        };
        writeln!(self.stdout, "{json}")
    }

    /// Output the result of a single-line query.
    ///
    /// An empty path is printed as an empty line and is still a success.
    pub fn symbol_path(&mut self, result: &PathResult) -> io::Result<ExitCode> {
        match self.format {
            OutputFormat::Text => writeln!(self.stdout, "{result}")?,
            OutputFormat::Json | OutputFormat::JsonCompact => self.write_json(result)?,
        }
        Ok(ExitCode::Success)
    }

    /// Output annotated diff records in insertion order.
    ///
    /// In text mode each record is printed as `line|status|symbol|content`.
    pub fn diff_symbols(&mut self, diffs: &DiffCollection) -> io::Result<ExitCode> {
        match self.format {
            OutputFormat::Text => {
                for record in diffs.records() {
                    writeln!(self.stdout, "{record}")?;
                }
            }
            OutputFormat::Json | OutputFormat::JsonCompact => self.write_json(diffs)?,
        }
        Ok(ExitCode::Success)
    }

    /// Output an error with suggestions.
    pub fn error(&mut self, error: &SymbolPathError) -> io::Result<ExitCode> {
        if self.format.is_json() {
            let response = JsonResponse::from_error(error);
            writeln!(self.stderr, "{}", serde_json::to_string_pretty(&response)?)?;
        } else {
            writeln!(self.stderr, "Error: {error}")?;
            for suggestion in error.recovery_suggestions() {
                writeln!(self.stderr, "  Suggestion: {suggestion}")?;
            }
        }
        Ok(ExitCode::from_error(error))
    }

    /// Output informational message (text mode only).
    pub fn info(&mut self, message: &str) -> io::Result<()> {
        if !self.format.is_json() {
            writeln!(self.stdout, "{message}")?;
        }
        Ok(())
    }
}
