//! Cross-call memoization of pool loads.

use super::{PoolError, WordPoolProvider};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Caches successful loads of an inner provider.
///
/// Failed loads are not cached, so a transient I/O fault is retried
/// by the next request.
pub struct CachedProvider<P> {
    inner: P,
    pools: RwLock<HashMap<usize, Vec<String>>>,
}

impl<P: WordPoolProvider> CachedProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            pools: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Number of lengths currently cached.
    ///
    /// Cached pools are only ever inserted whole, so a poisoned lock
    /// still holds consistent data.
    pub fn cached_lengths(&self) -> usize {
        self.pools
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Drops every cached pool.
    pub fn clear(&self) {
        let mut pools = self.pools.write().unwrap_or_else(PoisonError::into_inner);
        let dropped = pools.len();
        pools.clear();
        tracing::info!(dropped, "Word pool cache cleared");
    }
}

impl<P: WordPoolProvider> WordPoolProvider for CachedProvider<P> {
    fn load_pool(&self, length: usize) -> Result<Vec<String>, PoolError> {
        if let Some(pool) = self
            .pools
            .read()
            .map_err(|_| PoolError::Backend("pool cache lock poisoned".into()))?
            .get(&length)
        {
            tracing::trace!(length, "Word pool cache hit");
            return Ok(pool.clone());
        }

        let words = self.inner.load_pool(length)?;
        self.pools
            .write()
            .map_err(|_| PoolError::Backend("pool cache lock poisoned".into()))?
            .insert(length, words.clone());

        Ok(words)
    }
}
