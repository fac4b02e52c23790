//! Language detection and enumeration
//!
//! This module maps file extensions to the tree-sitter grammar used to parse
//! them, with per-language overrides from configuration.

use crate::config::LanguageConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Grammars a source file can be parsed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    JavaScript,
    TypeScript,
    Tsx,
}

impl Language {
    /// Every language, in detection order
    pub const ALL: [Language; 3] = [Language::JavaScript, Language::TypeScript, Language::Tsx];

    /// Grammar for files whose extension is not recognized.
    ///
    /// TSX accepts both type annotations and JSX, so it parses the widest
    /// range of scripts.
    pub const FALLBACK: Language = Language::Tsx;

    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "cjs" | "mjs" | "jsx" => Some(Language::JavaScript),
            "ts" | "cts" | "mts" => Some(Language::TypeScript),
            "tsx" => Some(Language::Tsx),
            _ => None,
        }
    }

    /// Pick the grammar for `path`, honoring configured extensions.
    ///
    /// A configured language claims the extensions it lists while enabled; a
    /// language absent from the table keeps its default extensions. Anything
    /// unclaimed is parsed with [`Language::FALLBACK`].
    pub fn detect(path: &Path, languages: &HashMap<String, LanguageConfig>) -> Self {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return Self::FALLBACK;
        };

        Self::ALL
            .into_iter()
            .find(|language| match languages.get(language.config_key()) {
                Some(config) => {
                    config.enabled
                        && config
                            .extensions
                            .iter()
                            .any(|candidate| candidate.eq_ignore_ascii_case(ext))
                }
                None => language.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext)),
            })
            .unwrap_or(Self::FALLBACK)
    }

    /// Get default file extensions for this language
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Language::JavaScript => &["js", "cjs", "mjs", "jsx"],
            Language::TypeScript => &["ts", "cts", "mts"],
            Language::Tsx => &["tsx"],
        }
    }

    /// Get the configuration key for this language
    pub fn config_key(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Tsx => "tsx",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Tsx => "TSX",
        }
    }

    /// The tree-sitter grammar for this language
    pub fn grammar(&self) -> tree_sitter::Language {
        match self {
            Language::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Language::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Language::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
