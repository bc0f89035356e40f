//! Kelime Sifre
//!
//! Memorable passphrases built by joining randomly drawn words of chosen
//! lengths, with a strength estimate for the result.
//!
//! # Architecture
//!
//! ```text
//! request → validation → pool resolution → draws → join → scoring
//!                             ↑
//!                     WordPoolProvider
//! ```
//!
//! # Design Principles
//!
//! - **All or nothing**: any validation or pool failure aborts the request;
//!   a partial passphrase is never returned
//! - **Empty is not an error**: a provider signals "no words" with an empty
//!   pool and the generator decides that is fatal
//! - **Injectable randomness**: draws go through any `rand::Rng`, so a
//!   seeded ChaCha20 stream reproduces a passphrase exactly
//! - **No security claims**: the strength label is a length and diversity
//!   heuristic, not an entropy measurement
//!
//! # Example
//!
//! ```no_run
//! use kelime_sifre::{DirectoryProvider, GenerationRequest, PassphraseGenerator};
//!
//! let generator = PassphraseGenerator::new(DirectoryProvider::new("word-lists"));
//! let request = GenerationRequest::new(3, vec![5, 6, 7]).with_separator("-");
//!
//! match generator.generate(&request) {
//!     Ok(passphrase) => println!("{} ({})", passphrase, passphrase.strength().label()),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod generator;
pub mod metrics;
pub mod pool;
#[cfg(feature = "server")]
pub mod server;
pub mod strength;

// Re-export commonly used types at crate root
pub use config::{ConfigError, FileConfig};
pub use generator::{
    ErrorKind, GeneratedPassphrase, GenerationError, GenerationRequest, PassphraseGenerator,
    ValidationCategory,
};
pub use pool::{CachedProvider, DirectoryProvider, MemoryProvider, PoolError, WordPoolProvider};
pub use strength::{Strength, StrengthReport};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
