//! Word lists stored as one newline-delimited file per length.

use super::{PoolError, WordPoolProvider};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Placeholder replaced by the word length in a file pattern.
pub const LENGTH_PLACEHOLDER: &str = "{length}";

/// File naming used by the bundled Turkish word lists.
pub const DEFAULT_FILE_PATTERN: &str = "{length}-harfli-kelimeler.txt";

/// Reads pools from `<directory>/<pattern with {length} substituted>`.
#[derive(Debug, Clone)]
pub struct DirectoryProvider {
    directory: PathBuf,
    file_pattern: String,
}

impl DirectoryProvider {
    /// Creates a provider using the default file pattern.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self::with_pattern(directory, DEFAULT_FILE_PATTERN)
    }

    /// Creates a provider with a custom file pattern.
    pub fn with_pattern(directory: impl Into<PathBuf>, file_pattern: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_pattern: file_pattern.into(),
        }
    }

    /// Returns the path of the word list for `length`.
    pub fn path_for(&self, length: usize) -> PathBuf {
        let name = self
            .file_pattern
            .replace(LENGTH_PLACEHOLDER, &length.to_string());
        self.directory.join(name)
    }
}

impl WordPoolProvider for DirectoryProvider {
    fn load_pool(&self, length: usize) -> Result<Vec<String>, PoolError> {
        let path = self.path_for(length);

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(length, path = %path.display(), "No word list for length");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(PoolError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        let words: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(String::from)
            .collect();

        tracing::debug!(length, words = words.len(), path = %path.display(), "Loaded word list");
        Ok(words)
    }
}
