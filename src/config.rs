//! Configuration module for symbol path resolution.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `SYMBOLPATH_` and use double
//! underscores to separate nested levels:
//! - `SYMBOLPATH_DIFF__LINE_ENDING=crlf` sets `diff.line_ending`
//! - `SYMBOLPATH_OUTPUT__PRETTY_JSON=true` sets `output.pretty_json`
//! - `SYMBOLPATH_DEBUG=true` sets `debug`

use crate::diff::LineEnding;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Directory holding the workspace configuration
pub const CONFIG_DIR: &str = ".symbolpath";

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "SYMBOLPATH_";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Workspace root directory (where .symbolpath is located)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_root: Option<PathBuf>,

    /// Global debug mode
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Diff file handling
    #[serde(default)]
    pub diff: DiffConfig,

    /// Result formatting
    #[serde(default)]
    pub output: OutputConfig,

    /// Grammar selection per language
    #[serde(default)]
    pub languages: HashMap<String, LanguageConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DiffConfig {
    /// Line terminator of diff files: "auto", "lf" or "crlf"
    #[serde(default)]
    pub line_ending: LineEnding,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct OutputConfig {
    /// Pretty-print JSON arrays from map-diffs-to-paths
    #[serde(default = "default_false")]
    pub pretty_json: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LanguageConfig {
    /// Whether this grammar may be selected
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// File extensions parsed with this grammar
    #[serde(default)]
    pub extensions: Vec<String>,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            workspace_root: None,
            debug: false,
            diff: DiffConfig::default(),
            output: OutputConfig::default(),
            languages: default_languages(),
        }
    }
}

fn default_languages() -> HashMap<String, LanguageConfig> {
    use crate::parsing::Language;

    Language::ALL
        .iter()
        .map(|language| {
            (
                language.config_key().to_string(),
                LanguageConfig {
                    enabled: true,
                    extensions: language
                        .extensions()
                        .iter()
                        .map(|ext| ext.to_string())
                        .collect(),
                },
            )
        })
        .collect()
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        // Try to find the workspace root by looking for .symbolpath directory
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| Path::new(CONFIG_DIR).join("settings.toml"));

        Self::figment(config_path)
            .extract()
            .map_err(Box::new)
            .map(|mut settings: Settings| {
                if settings.workspace_root.is_none() {
                    settings.workspace_root = Self::workspace_root();
                }
                settings
            })
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(path.as_ref()).extract().map_err(Box::new)
    }

    /// Defaults, then the TOML file if it exists, then environment variables
    fn figment(config_path: impl AsRef<Path>) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(config_path.as_ref()))
            // Double underscore (__) separates nested levels
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str()
                    .to_lowercase()
                    .replace("__", ".")
                    .into()
            }))
    }

    /// Find the workspace config by looking for the .symbolpath directory
    /// Searches from current directory up to root
    fn find_workspace_config() -> Option<PathBuf> {
        Self::workspace_root().map(|root| root.join(CONFIG_DIR).join("settings.toml"))
    }

    /// Get the workspace root directory (where .symbolpath is located)
    pub fn workspace_root() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .find(|ancestor| ancestor.join(CONFIG_DIR).is_dir())
            .map(Path::to_path_buf)
    }

    /// Effective settings rendered as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Create a default settings file with helpful comments
    pub fn init_config_file(force: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
        Self::init_config_file_in(Path::new("."), force)
    }

    /// Create the settings file under `root`
    pub fn init_config_file_in(
        root: &Path,
        force: bool,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path = root.join(CONFIG_DIR).join("settings.toml");

        if !force && config_path.exists() {
            return Err("Configuration file already exists. Use --force to overwrite".into());
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, CONFIG_TEMPLATE)?;
        tracing::debug!("[config] wrote {}", config_path.display());

        Ok(config_path)
    }
}

const CONFIG_TEMPLATE: &str = r#"# symbolpath configuration file

# Version of the configuration schema
version = 1

# Global debug mode (same as --debug)
debug = false

[diff]
# Line terminator of diff files
# "auto": split on \n and strip a trailing \r
# "lf":   split on \n only
# "crlf": split on \r\n only
line_ending = "auto"

[output]
# Pretty-print the JSON array of map-diffs-to-paths (same as --pretty)
pretty_json = false

# Grammar used for each file extension
# Files with unknown extensions are parsed with the TSX grammar

[languages.javascript]
enabled = true
extensions = ["js", "cjs", "mjs", "jsx"]

[languages.typescript]
enabled = true
extensions = ["ts", "cts", "mts"]

[languages.tsx]
enabled = true
extensions = ["tsx"]
"#;
