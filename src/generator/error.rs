//! Generation failures.

use crate::pool::PoolError;
use thiserror::Error;

/// Coarse failure classes, used to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or out-of-range request; fixable by the caller.
    Input,
    /// A valid length has no words.
    DataUnavailable,
    /// The pool backend failed.
    Unexpected,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Input => "input",
            ErrorKind::DataUnavailable => "data_unavailable",
            ErrorKind::Unexpected => "unexpected",
        }
    }
}

/// Which validation rule rejected the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationCategory {
    WordCount,
    WordLengths,
    NoWords,
}

impl ValidationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationCategory::WordCount => "word_count",
            ValidationCategory::WordLengths => "word_lengths",
            ValidationCategory::NoWords => "no_words",
        }
    }
}

/// Errors returned by [`crate::PassphraseGenerator::generate`].
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("word count must be between 1 and 10")]
    InvalidWordCount { count: i64 },

    #[error("at least one word length must be specified")]
    MissingWordLengths,

    #[error("word lengths must be between 3 and 10")]
    InvalidWordLengths { lengths: Vec<i64> },

    #[error("no words found for length {length}")]
    NoWordsForLength { length: usize },

    #[error("failed to load words of length {length}")]
    PoolUnavailable {
        length: usize,
        #[source]
        source: PoolError,
    },
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::InvalidWordCount { .. }
            | GenerationError::MissingWordLengths
            | GenerationError::InvalidWordLengths { .. } => ErrorKind::Input,
            GenerationError::NoWordsForLength { .. } => ErrorKind::DataUnavailable,
            GenerationError::PoolUnavailable { .. } => ErrorKind::Unexpected,
        }
    }

    /// The validation rule that failed, if this is a validation error.
    pub fn category(&self) -> Option<ValidationCategory> {
        match self {
            GenerationError::InvalidWordCount { .. } => Some(ValidationCategory::WordCount),
            GenerationError::MissingWordLengths | GenerationError::InvalidWordLengths { .. } => {
                Some(ValidationCategory::WordLengths)
            }
            GenerationError::NoWordsForLength { .. } => Some(ValidationCategory::NoWords),
            GenerationError::PoolUnavailable { .. } => None,
        }
    }
}
