//! Generation requests and their validation.

use super::GenerationError;
use serde::{Deserialize, Serialize};

pub const MIN_WORD_COUNT: i64 = 1;
pub const MAX_WORD_COUNT: i64 = 10;
pub const MIN_WORD_LENGTH: i64 = 3;
pub const MAX_WORD_LENGTH: i64 = 10;

pub const DEFAULT_WORD_COUNT: i64 = 3;
pub const DEFAULT_WORD_LENGTHS: [i64; 3] = [5, 6, 7];
pub const DEFAULT_SEPARATOR: &str = "-";

/// What the caller asked for.
///
/// Integers are signed so that out-of-range input from the wire reaches
/// validation instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationRequest {
    /// Number of words to draw.
    pub word_count: i64,
    /// Lengths a word may be drawn from.
    pub word_lengths: Vec<i64>,
    /// String placed between words.
    pub separator: String,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            word_count: DEFAULT_WORD_COUNT,
            word_lengths: DEFAULT_WORD_LENGTHS.to_vec(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl GenerationRequest {
    /// Creates a request with the default separator.
    pub fn new(word_count: i64, word_lengths: impl Into<Vec<i64>>) -> Self {
        Self {
            word_count,
            word_lengths: word_lengths.into(),
            ..Default::default()
        }
    }

    /// Sets the separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Checks the request and returns the usable lengths in request order.
    ///
    /// Lengths outside the allowed range are dropped without being
    /// reported individually. Duplicates are kept.
    pub fn validate(&self) -> Result<Vec<usize>, GenerationError> {
        if !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&self.word_count) {
            return Err(GenerationError::InvalidWordCount {
                count: self.word_count,
            });
        }

        if self.word_lengths.is_empty() {
            return Err(GenerationError::MissingWordLengths);
        }

        let valid: Vec<usize> = self
            .word_lengths
            .iter()
            .filter(|length| (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(*length))
            .map(|&length| length as usize)
            .collect();

        if valid.is_empty() {
            return Err(GenerationError::InvalidWordLengths {
                lengths: self.word_lengths.clone(),
            });
        }

        Ok(valid)
    }
}
