//! In-memory word pools.

use super::{PoolError, WordPoolProvider};
use std::collections::HashMap;

/// A fixed table of pools held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    pools: HashMap<usize, Vec<String>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table by grouping words on their character count.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut provider = Self::new();
        for word in words {
            let word = word.into();
            provider
                .pools
                .entry(word.chars().count())
                .or_default()
                .push(word);
        }
        provider
    }

    /// Replaces the pool stored under `length`.
    ///
    /// The words are stored as given; callers wanting a strict pool
    /// should use [`MemoryProvider::from_words`].
    pub fn with_pool<I, S>(mut self, length: usize, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pools
            .insert(length, words.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the lengths that have at least one word.
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self
            .pools
            .iter()
            .filter(|(_, words)| !words.is_empty())
            .map(|(length, _)| *length)
            .collect();
        lengths.sort_unstable();
        lengths
    }
}

impl WordPoolProvider for MemoryProvider {
    fn load_pool(&self, length: usize) -> Result<Vec<String>, PoolError> {
        Ok(self.pools.get(&length).cloned().unwrap_or_default())
    }
}
