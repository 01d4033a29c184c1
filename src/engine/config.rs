// Configuration for snag, read from ~/.config/snag/config.yaml.
// Every field has a default, so a partial or missing file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Reading behavior
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Hide the rest of the document from the first marked word (default off)
    pub hide_after_mark: bool,

    /// Ask before removing words or discarding the document (default on)
    pub confirm_destructive: bool,

    /// Words skipped by the up/down keys (default 10)
    pub scroll_step: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            hide_after_mark: false,
            confirm_destructive: true,
            scroll_step: 10,
        }
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File written by `:export` without an explicit path
    pub csv_file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            csv_file_name: "removed_words.csv".to_string(),
        }
    }
}

/// Theme colors as hex strings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background_color: String, // #1A1B26 Stormy Dark
    pub text_color: String,       // #A9B1D6 Light Blue
    pub marked_color: String,     // #F7768E Coral Red
    pub cursor_color: String,     // #7AA2F7 Blue
    pub dimmed_color: String,     // #646E96 Dimmed Blue
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background_color: "#1A1B26".to_string(),
            text_color: "#A9B1D6".to_string(),
            marked_color: "#F7768E".to_string(),
            cursor_color: "#7AA2F7".to_string(),
            dimmed_color: "#646E96".to_string(),
        }
    }
}

/// Notes subsystem
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    /// Where category bindings are stored (default ~/.config/snag/notes.json)
    pub store_file: Option<PathBuf>,
}

/// Master configuration combining all snag settings
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reader: ReaderConfig,
    pub export: ExportConfig,
    pub theme: ThemeConfig,
    pub notes: NotesConfig,
}

impl Config {
    /// Loads the user config, falling back to defaults when it is missing or
    /// unreadable.
    pub fn load() -> Self {
        match crate::config_paths::config_file() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };
        match Self::parse(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Where note bindings live: the configured file, else the default store.
    pub fn notes_store(&self) -> Option<PathBuf> {
        self.notes
            .store_file
            .clone()
            .or_else(crate::config_paths::notes_store)
    }
}
