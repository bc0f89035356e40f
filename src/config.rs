//! TOML configuration.
//!
//! Every section is optional; a missing file section falls back to the
//! same defaults the generator applies to an empty request.

use crate::generator::{
    GenerationRequest, DEFAULT_SEPARATOR, DEFAULT_WORD_COUNT, DEFAULT_WORD_LENGTHS,
};
use crate::pool::{CachedProvider, DirectoryProvider, DEFAULT_FILE_PATTERN, LENGTH_PLACEHOLDER};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("file pattern must contain {{length}}: {0}")]
    InvalidFilePattern(String),
    #[error("invalid default request: {0}")]
    InvalidDefaults(String),
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub word_lists: WordListConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Where the per-length word lists live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WordListConfig {
    /// Directory holding one file per word length.
    pub directory: PathBuf,
    /// File name pattern; `{length}` is replaced by the word length.
    pub file_pattern: String,
    /// Keep loaded pools in memory across requests.
    pub cache: bool,
}

impl Default for WordListConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("word-lists"),
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            cache: true,
        }
    }
}

impl WordListConfig {
    /// Builds the directory-backed provider described by this section.
    pub fn provider(&self) -> DirectoryProvider {
        DirectoryProvider::with_pattern(&self.directory, &self.file_pattern)
    }

    /// Same as [`Self::provider`], wrapped in a cache.
    pub fn cached_provider(&self) -> CachedProvider<DirectoryProvider> {
        CachedProvider::new(self.provider())
    }
}

/// Request values used when the caller leaves a field out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub word_count: i64,
    pub word_lengths: Vec<i64>,
    pub separator: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            word_count: DEFAULT_WORD_COUNT,
            word_lengths: DEFAULT_WORD_LENGTHS.to_vec(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl DefaultsConfig {
    /// The request these defaults describe.
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.word_count, self.word_lengths.clone())
            .with_separator(&self.separator)
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.word_lists.file_pattern.contains(LENGTH_PLACEHOLDER) {
            return Err(ConfigError::InvalidFilePattern(
                self.word_lists.file_pattern.clone(),
            ));
        }
        self.defaults
            .request()
            .validate()
            .map_err(|e| ConfigError::InvalidDefaults(e.to_string()))?;
        Ok(())
    }
}
