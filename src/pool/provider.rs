//! The word pool provider abstraction.

use std::sync::Arc;
use thiserror::Error;

/// Errors a provider reports when its backing store is present but unusable.
///
/// A length with no backing data is not an error: providers return an
/// empty pool for it and leave the decision to the caller.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("word pool backend failure: {0}")]
    Backend(String),
}

/// Resolves a word length to its candidate words.
///
/// Implementations must accept any length, not only the range the
/// generator allows.
pub trait WordPoolProvider: Send + Sync {
    /// Loads every word of the given length.
    ///
    /// Returns an empty vector when there is no data for `length`.
    fn load_pool(&self, length: usize) -> Result<Vec<String>, PoolError>;
}

impl<P: WordPoolProvider + ?Sized> WordPoolProvider for &P {
    fn load_pool(&self, length: usize) -> Result<Vec<String>, PoolError> {
        (**self).load_pool(length)
    }
}

impl<P: WordPoolProvider + ?Sized> WordPoolProvider for Box<P> {
    fn load_pool(&self, length: usize) -> Result<Vec<String>, PoolError> {
        (**self).load_pool(length)
    }
}

impl<P: WordPoolProvider + ?Sized> WordPoolProvider for Arc<P> {
    fn load_pool(&self, length: usize) -> Result<Vec<String>, PoolError> {
        (**self).load_pool(length)
    }
}
