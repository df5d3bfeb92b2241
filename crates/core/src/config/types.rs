use std::path::PathBuf;

use serde::Deserialize;

use crate::markdown::EditOptions;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EditorConfig {
    /// Right-trim every line when writing a document back (default: true)
    #[serde(default = "default_strip_trailing_whitespace")]
    pub strip_trailing_whitespace: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { strip_trailing_whitespace: default_strip_trailing_whitespace() }
    }
}

impl EditorConfig {
    pub fn edit_options(&self) -> EditOptions {
        EditOptions { strip_trailing_whitespace: self.strip_trailing_whitespace }
    }
}

fn default_strip_trailing_whitespace() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    /// File the settings came from, `None` when running on built-in defaults
    pub source: Option<PathBuf>,
    pub editor: EditorConfig,
    pub logging: LoggingConfig,
}
