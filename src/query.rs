//! File-level queries behind the CLI commands.
//!
//! Each query reads its inputs, parses the source with the grammar chosen by
//! [`Settings`], and runs the resolver or mapper over the lowered tree.

use crate::config::Settings;
use crate::diff::{DiffCollection, split_lines};
use crate::error::{SymbolPathError, SymbolPathResult};
use crate::parsing::{Language, SourceParser};
use crate::symbol::{SymbolResolver, map_diffs_to_symbols};
use crate::syntax::SyntaxTree;
use serde::Serialize;
use std::path::Path;

/// Answer of a single-line query; `path` is empty when no declaration
/// encloses the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub file: String,
    pub line: u32,
    pub path: String,
}

impl std::fmt::Display for PathResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path)
    }
}

/// Read a text file, replacing invalid UTF-8 sequences.
pub fn read_text(path: &Path) -> SymbolPathResult<String> {
    let bytes = std::fs::read(path).map_err(|source| SymbolPathError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parse `code` as the contents of `path`.
pub fn parse_source(settings: &Settings, path: &Path, code: &str) -> SymbolPathResult<SyntaxTree> {
    let language = Language::detect(path, &settings.languages);
    let mut parser = SourceParser::new(language)?;
    parser.parse(path, code)
}

/// Read and parse a source file.
pub fn parse_file(settings: &Settings, path: &Path) -> SymbolPathResult<SyntaxTree> {
    let code = read_text(path)?;
    parse_source(settings, path, &code)
}

/// Build a diff collection from the text of a diff listing.
pub fn parse_diffs(settings: &Settings, diff_path: &Path, text: &str) -> SymbolPathResult<DiffCollection> {
    let lines = split_lines(text, settings.diff.line_ending);
    DiffCollection::from_lines(lines).map_err(|source| SymbolPathError::InvalidDiff {
        path: diff_path.to_path_buf(),
        source,
    })
}

/// Resolve the symbol path enclosing `line` of `file`.
pub fn get_path(settings: &Settings, file: &Path, line: u32) -> SymbolPathResult<PathResult> {
    let tree = parse_file(settings, file)?;
    let path = SymbolResolver::new(&tree).resolve_line(line);

    Ok(PathResult {
        file: file.display().to_string(),
        line,
        path,
    })
}

/// Annotate every line of `diff_file` with its enclosing symbol in `file`.
///
/// The diff listing is validated before the source is parsed, so malformed
/// input fails without touching the source file.
pub fn map_diffs_to_paths(
    settings: &Settings,
    file: &Path,
    diff_file: &Path,
) -> SymbolPathResult<DiffCollection> {
    let text = read_text(diff_file)?;
    let mut diffs = parse_diffs(settings, diff_file, &text)?;

    let tree = parse_file(settings, file)?;
    map_diffs_to_symbols(&tree, &mut diffs);

    Ok(diffs)
}
