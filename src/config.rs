//! Session configuration

use crate::error::{GatherError, Result};
use crate::nlp::StopWords;
use serde::Deserialize;
use std::path::Path;

/// Name proposed for exports when no file is open
pub const DEFAULT_EXPORT_NAME: &str = "selected_words.txt";

/// Settings fixed for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Words treated as simple in addition to the built-in list
    pub extra_stop_words: Vec<String>,
    /// Appended to the article's file stem to name the export
    pub export_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extra_stop_words: Vec::new(),
            export_suffix: "_selected".to_string(),
        }
    }
}

impl Config {
    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| GatherError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parse a JSON config
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Build the stop-word set this config describes
    pub fn stop_words(&self) -> StopWords {
        StopWords::english().with_extra(&self.extra_stop_words)
    }

    /// Export file name for an article at `source`
    pub fn export_name(&self, source: Option<&Path>) -> String {
        source
            .and_then(|path| path.file_stem())
            .map(|stem| format!("{}{}.txt", stem.to_string_lossy(), self.export_suffix))
            .unwrap_or_else(|| DEFAULT_EXPORT_NAME.to_string())
    }
}
