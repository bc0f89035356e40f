//! Word pools keyed by word length.
//!
//! A pool is the set of candidate words for one length. Where the words
//! come from is the provider's business: a directory of word-list files,
//! an in-memory table, or a cache in front of either.

mod cache;
mod directory;
mod memory;
mod provider;

pub use cache::CachedProvider;
pub use directory::{DirectoryProvider, DEFAULT_FILE_PATTERN, LENGTH_PLACEHOLDER};
pub use memory::MemoryProvider;
pub use provider::{PoolError, WordPoolProvider};
