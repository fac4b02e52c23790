//! Source parser producing [`SyntaxTree`]s.

use super::{Language, typescript};
use crate::error::{SymbolPathError, SymbolPathResult};
use crate::syntax::SyntaxTree;
use std::path::Path;
use tree_sitter::Parser;

/// Parser for one grammar, reusable across files of that language
pub struct SourceParser {
    parser: Parser,
    language: Language,
}

impl SourceParser {
    /// Create a parser with the grammar of `language` loaded
    pub fn new(language: Language) -> SymbolPathResult<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&language.grammar())
            .map_err(|e| SymbolPathError::ParserInit {
                language: language.name().to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { parser, language })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Parse `code` and lower it into a [`SyntaxTree`].
    ///
    /// Syntax errors do not fail the parse; erroneous regions become
    /// unclassified nodes and only their well-formed declarations label lines.
    pub fn parse(&mut self, path: &Path, code: &str) -> SymbolPathResult<SyntaxTree> {
        let parsed = self
            .parser
            .parse(code, None)
            .ok_or_else(|| SymbolPathError::ParseFailure {
                path: path.to_path_buf(),
                language: self.language.name().to_string(),
            })?;

        let root = parsed.root_node();
        if root.has_error() {
            tracing::warn!(
                "[parser] {} contains syntax errors; results may be incomplete",
                path.display()
            );
        }

        let tree = typescript::lower(root, code);
        tracing::debug!(
            "[parser] parsed {} as {} into {} nodes",
            path.display(),
            self.language,
            tree.len()
        );

        Ok(tree)
    }
}
